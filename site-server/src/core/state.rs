use std::sync::Arc;

use shared::models::SiteSettings;
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::core::error::{Result, ServerError};
use crate::db::DbService;
use crate::db::repository::session;
use crate::services::MediaStore;
use crate::services::settings::load_site_settings;

/// 服务器状态 - 持有所有服务的共享引用
///
/// Clone 只复制 Arc 和连接池句柄。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | 会话令牌 |
/// | settings | Arc<SiteSettings> | 启动时加载的站点设置 |
/// | media | MediaStore | 媒体文件目录 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
    pub settings: Arc<SiteSettings>,
    pub media: MediaStore,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录
    /// 2. 校验 JWT 配置
    /// 3. 打开数据库并迁移
    /// 4. 清理过期会话, 加载站点设置
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;
        let db = DbService::new(&config.database_path).await?;
        Self::with_db(config.clone(), db).await
    }

    /// 基于已打开的数据库构建状态 (测试使用内存库)
    pub async fn with_db(config: Config, db: DbService) -> Result<Self> {
        config
            .jwt
            .validate()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let purged = session::purge_expired(&db.pool, now_millis())
            .await
            .map_err(crate::utils::AppError::from)?;
        if purged > 0 {
            tracing::info!(purged, "Expired sessions removed");
        }

        let settings = load_site_settings(&db.pool).await?;
        tracing::info!("Site settings loaded");

        Ok(Self {
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            media: MediaStore::new(&config.media_dir),
            settings: Arc::new(settings),
            pool: db.pool,
            config,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }
}
