//! 会话中间件
//!
//! 所有路由都经过此中间件。有效会话会把 [`CurrentUser`] 注入请求扩展;
//! 无效或过期的令牌按匿名访问处理, 只记录安全日志。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::session::{resolve, token_from_headers};
use crate::core::ServerState;
use crate::security_log;

pub async fn resolve_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = token_from_headers(req.headers()).map(str::to_owned);

    if let Some(token) = token {
        match resolve(state.pool(), &state.get_jwt_service(), &token).await {
            Ok(Some(user)) => {
                req.extensions_mut().insert(user);
            }
            Ok(None) => {
                security_log!("INFO", "session_gone", uri = format!("{:?}", req.uri()));
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "auth_failed",
                    error = format!("{}", e),
                    uri = format!("{:?}", req.uri())
                );
            }
        }
    }

    next.run(req).await
}
