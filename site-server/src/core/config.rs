use std::path::PathBuf;

use crate::auth::JwtConfig;

/// 服务器配置 - 站点的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_PATH | {WORK_DIR}/database/site.db | SQLite 文件 |
/// | MEDIA_DIR | {WORK_DIR}/media | 上传的图片 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
/// | AUTH_DELAY_MS | 500 | 登录固定延迟(毫秒) |
///
/// JWT 相关变量见 [`JwtConfig`]。
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/site HTTP_PORT=8080 cargo run -p site-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、媒体和日志
    pub work_dir: String,
    pub http_port: u16,
    /// SQLite 数据库路径
    pub database_path: String,
    /// 媒体文件目录 (served under /media)
    pub media_dir: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 登录固定延迟 (毫秒)，防止时序攻击
    pub auth_delay_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("database")
                .join("site.db")
                .to_string_lossy()
                .into_owned()
        });
        let media_dir = std::env::var("MEDIA_DIR").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("media")
                .to_string_lossy()
                .into_owned()
        });

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database_path,
            media_dir,
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
            auth_delay_ms: std::env::var("AUTH_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(500),
            work_dir,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景：工作目录下的数据库和媒体目录，无登录延迟
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        let work_dir: String = work_dir.into();
        let root = PathBuf::from(&work_dir);
        config.database_path = root
            .join("database")
            .join("site.db")
            .to_string_lossy()
            .into_owned();
        config.media_dir = root.join("media").to_string_lossy().into_owned();
        config.work_dir = work_dir;
        config.http_port = http_port;
        config.auth_delay_ms = 0;
        config
    }

    /// 确保数据库和媒体目录存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        if let Some(parent) = PathBuf::from(&self.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::create_dir_all(&self.media_dir)?;
        if let Some(dir) = &self.log_dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_place_files_under_work_dir() {
        let config = Config::with_overrides("/tmp/site-test", 9123);
        assert_eq!(config.http_port, 9123);
        assert_eq!(config.auth_delay_ms, 0);
        assert!(config.database_path.starts_with("/tmp/site-test"));
        assert!(config.database_path.ends_with("site.db"));
        assert!(config.media_dir.ends_with("media"));
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("/tmp/site-test", 0);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
