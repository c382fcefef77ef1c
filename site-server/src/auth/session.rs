//! 会话解析
//!
//! 令牌来源: `site_session` Cookie 或 `Authorization: Bearer <token>`。
//! JWT 只是会话的签名引用; 会话行必须存在且未过期, 角色每次从数据库读取。

use std::collections::BTreeSet;

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE};
use shared::models::is_manager;
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::auth::{JwtError, JwtService};
use crate::db::repository::{account, session};
use crate::utils::{AppError, AppResult};

/// Session cookie name
pub const SESSION_COOKIE: &str = "site_session";

/// 当前登录用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub account_id: i64,
    pub username: String,
    pub session_id: String,
    pub roles: BTreeSet<String>,
}

impl CurrentUser {
    pub fn is_manager(&self) -> bool {
        is_manager(&self.roles)
    }
}

/// Pull the session token from the cookie, falling back to a bearer header
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let from_cookie = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value);

    from_cookie.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(JwtService::extract_from_header)
    })
}

/// `Set-Cookie` value carrying a fresh session token
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value that clears the session cookie
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Resolve a token into the logged-in user
///
/// `Ok(None)` means the token no longer names a live session (logged out,
/// expired or the account is gone). Signature and claim failures are errors.
pub async fn resolve(
    pool: &SqlitePool,
    jwt: &JwtService,
    token: &str,
) -> AppResult<Option<CurrentUser>> {
    let claims = jwt.validate_token(token).map_err(|e| match e {
        JwtError::ExpiredToken => AppError::token_expired(),
        other => AppError::invalid_token(other.to_string()),
    })?;

    let account_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| AppError::invalid_token("Malformed subject claim"))?;

    let Some(row) = session::find_live(pool, &claims.sid, now_millis()).await? else {
        return Ok(None);
    };
    if row.account_id != account_id {
        return Ok(None);
    }

    let Some(acc) = account::find_by_id(pool, account_id).await? else {
        return Ok(None);
    };
    let roles = account::roles(pool, account_id).await?;

    Ok(Some(CurrentUser {
        account_id,
        username: acc.username,
        session_id: row.id,
        roles,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use crate::db::repository::test_pool;
    use http::HeaderValue;
    use shared::models::MANAGER_ROLE;

    fn jwt() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "session-test-secret-long-enough-0123456789".to_string(),
            expiration_minutes: 60,
            issuer: "site-server".to_string(),
            audience: "site-visitors".to_string(),
        })
    }

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; site_session=abc.def; other=1"),
        );
        assert_eq!(token_from_headers(&headers), Some("abc.def"));
    }

    #[test]
    fn test_token_from_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(token_from_headers(&headers), Some("tok"));

        headers.insert(COOKIE, HeaderValue::from_static("site_session="));
        assert_eq!(token_from_headers(&headers), Some("tok"));
    }

    #[test]
    fn test_no_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);
        headers.insert(COOKIE, HeaderValue::from_static("site_sessionx=1"));
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn test_cookie_values() {
        assert!(session_cookie("t", 60).starts_with("site_session=t;"));
        assert!(clear_session_cookie().contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_resolve_live_session() {
        let pool = test_pool().await;
        let jwt = jwt();
        let acc = account::create(&pool, "boss", "$h", 0).await.unwrap();
        account::grant_role(&pool, acc.id, MANAGER_ROLE).await.unwrap();
        let now = now_millis();
        session::create(&pool, "sid-1", acc.id, now, now + 60_000)
            .await
            .unwrap();

        let token = jwt.generate_token(acc.id, "boss", "sid-1").unwrap();
        let user = resolve(&pool, &jwt, &token).await.unwrap().unwrap();
        assert_eq!(user.username, "boss");
        assert!(user.is_manager());

        session::delete(&pool, "sid-1").await.unwrap();
        assert!(resolve(&pool, &jwt, &token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_rejects_foreign_session() {
        let pool = test_pool().await;
        let jwt = jwt();
        let a = account::create(&pool, "a", "$h", 0).await.unwrap();
        let b = account::create(&pool, "b", "$h", 0).await.unwrap();
        let now = now_millis();
        session::create(&pool, "sid-a", a.id, now, now + 60_000)
            .await
            .unwrap();

        let token = jwt.generate_token(b.id, "b", "sid-a").unwrap();
        assert!(resolve(&pool, &jwt, &token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_garbage_token() {
        let pool = test_pool().await;
        let err = resolve(&pool, &jwt(), "garbage").await.unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::TokenInvalid);
    }
}
