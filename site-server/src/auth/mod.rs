//! 认证授权模块
//!
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前登录用户 (会话 + 角色)
//! - [`resolve_session`] - 会话解析中间件
//! - [`password`] - Argon2 密码哈希

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::resolve_session;
pub use session::{CurrentUser, SESSION_COOKIE};
