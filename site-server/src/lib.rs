//! Site Server - 餐厅网站服务端
//!
//! # 架构概述
//!
//! - **首页** (`api/pages`): 菜单、活动、相册等内容, 以及预订/联系表单
//! - **账户** (`api/account`): 注册、登录、登出 (Argon2 + JWT 会话)
//! - **经理后台** (`api/manager`): 处理预订与联系请求
//! - **数据库** (`db`): SQLite (sqlx) 与迁移
//!
//! # 模块结构
//!
//! ```text
//! site-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT、密码、会话解析
//! ├── services/      # 业务操作
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装与中间件层
//! ├── middleware/    # 请求日志
//! ├── utils/         # 错误类型再导出、日志
//! └── db/            # 连接池与仓储
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use routes::{OneshotRouter, build_app};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 准备运行环境: 加载 `.env`, 读取配置, 创建目录, 初始化日志
///
/// 返回的 [`Config`] 供启动流程继续使用, 配置 (包括 JWT 密钥) 只加载一次
pub fn setup_environment() -> Result<Config, crate::core::ServerError> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    prepare_environment(&config)?;
    Ok(config)
}

/// 按给定配置创建工作目录并初始化日志
pub fn prepare_environment(config: &Config) -> Result<(), crate::core::ServerError> {
    config.ensure_work_dir_structure()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _____ _ __
  / ___/(_) /____
  \__ \/ / __/ _ \
 ___/ / / /_/  __/
/____/_/\__/\___/
    "#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_environment_creates_work_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(dir.path().to_string_lossy(), 0);

        prepare_environment(&config).unwrap();

        assert!(std::path::Path::new(&config.media_dir).is_dir());
        assert!(
            std::path::Path::new(&config.database_path)
                .parent()
                .unwrap()
                .is_dir()
        );
    }
}
