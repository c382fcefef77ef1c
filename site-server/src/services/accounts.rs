//! Accounts
//!
//! 注册、登录、登出与角色授予。登录失败只返回一个通用错误,
//! 不区分用户名不存在和密码错误。

use shared::error::ErrorCode;
use shared::models::{Account, LoginForm, RegisteredAccount, RegistrationForm};
use shared::util::now_millis;
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{CurrentUser, JwtService};
use crate::db::repository::{RepoError, account, session};
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub account_id: i64,
    pub username: String,
    pub session_id: String,
    pub token: String,
    /// Token lifetime in seconds, for the cookie's Max-Age
    pub max_age_secs: i64,
}

fn username_taken(username: &str) -> AppError {
    AppError::with_message(
        ErrorCode::UsernameExists,
        format!("Username '{username}' already exists"),
    )
    .with_field_error("username", "A user with that username already exists.")
}

/// Create an account with no roles
pub async fn register(pool: &SqlitePool, form: RegistrationForm) -> AppResult<RegisteredAccount> {
    let form = form.normalized();
    form.validate()?;

    if account::find_credentials(pool, &form.username).await?.is_some() {
        return Err(username_taken(&form.username));
    }

    let hash = hash_password(&form.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    // 并发注册同名用户时由唯一约束兜底
    let created = account::create(pool, &form.username, &hash, now_millis())
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => username_taken(&form.username),
            other => other.into(),
        })?;

    tracing::info!(account_id = created.id, username = %created.username, "Account registered");
    Ok(RegisteredAccount {
        id: created.id,
        username: created.username,
    })
}

/// Check credentials and open a session
pub async fn login(pool: &SqlitePool, jwt: &JwtService, form: &LoginForm) -> AppResult<LoginSession> {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        security_log!("WARN", "login_failed", username = username.to_string(), reason = "missing_field");
        return Err(AppError::invalid_credentials());
    }

    let Some(creds) = account::find_credentials(pool, username).await? else {
        security_log!("WARN", "login_failed", username = username.to_string(), reason = "user_not_found");
        return Err(AppError::invalid_credentials());
    };

    let verified = verify_password(&form.password, &creds.password_hash).unwrap_or_else(|e| {
        tracing::error!(account_id = creds.id, error = %e, "Stored password hash is malformed");
        false
    });
    if !verified {
        security_log!("WARN", "login_failed", username = username.to_string(), reason = "invalid_password");
        return Err(AppError::invalid_credentials());
    }

    let now = now_millis();
    let session_id = uuid::Uuid::new_v4().to_string();
    session::create(pool, &session_id, creds.id, now, now + jwt.session_ttl_millis()).await?;

    let token = jwt
        .generate_token(creds.id, &creds.username, &session_id)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    security_log!("INFO", "login_success", account_id = creds.id, username = creds.username.clone());

    Ok(LoginSession {
        account_id: creds.id,
        username: creds.username,
        session_id,
        token,
        max_age_secs: jwt.config.expiration_minutes * 60,
    })
}

/// End the current session; a no-op for anonymous visitors
pub async fn logout(pool: &SqlitePool, user: Option<&CurrentUser>) -> AppResult<()> {
    if let Some(user) = user {
        session::delete(pool, &user.session_id).await?;
        tracing::info!(account_id = user.account_id, "Logged out");
    }
    Ok(())
}

/// Keep `next` only when it is a local path
pub fn safe_next(candidate: Option<&str>) -> Option<String> {
    let next = candidate?.trim();
    let local = next.starts_with('/') && !next.starts_with("//") && !next.starts_with("/\\");
    local.then(|| next.to_string())
}

/// Grant a role by username
pub async fn grant_role(pool: &SqlitePool, username: &str, role: &str) -> AppResult<Account> {
    let creds = account::find_credentials(pool, username)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::AccountNotFound, format!("No account '{username}'"))
        })?;
    account::grant_role(pool, creds.id, role).await?;

    let acc = account::find_by_id(pool, creds.id)
        .await?
        .ok_or_else(|| AppError::with_message(ErrorCode::AccountNotFound, username.to_string()))?;
    security_log!("INFO", "role_granted", username = username.to_string(), role = role.to_string());
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{JwtConfig, session::resolve};
    use crate::db::repository::test_pool;
    use shared::models::MANAGER_ROLE;
    use shared::validation::{NON_FIELD_ERRORS, PASSWORD_MISMATCH_MESSAGE};

    fn jwt() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "accounts-test-secret-long-enough-0123456789".to_string(),
            expiration_minutes: 30,
            issuer: "site-server".to_string(),
            audience: "site-visitors".to_string(),
        })
    }

    fn registration(username: &str, p1: &str, p2: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.into(),
            password: p1.into(),
            password2: p2.into(),
        }
    }

    fn login_form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.into(),
            password: password.into(),
            next: None,
        }
    }

    #[tokio::test]
    async fn test_register_mismatch_creates_nothing() {
        let pool = test_pool().await;
        let err = register(&pool, registration("mario", "one", "two"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.field_messages(NON_FIELD_ERRORS),
            vec![PASSWORD_MISMATCH_MESSAGE.to_string()]
        );
        assert_eq!(account::count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_duplicate() {
        let pool = test_pool().await;
        register(&pool, registration("mario", "pw", "pw")).await.unwrap();
        let err = register(&pool, registration(" mario ", "pw", "pw"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UsernameExists);
        assert_eq!(account::count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let pool = test_pool().await;
        let jwt = jwt();
        let registered = register(&pool, registration("mario", "pw", "pw")).await.unwrap();

        let session = login(&pool, &jwt, &login_form("mario", "pw")).await.unwrap();
        assert_eq!(session.account_id, registered.id);
        assert_eq!(session.max_age_secs, 1800);

        let user = resolve(&pool, &jwt, &session.token).await.unwrap().unwrap();
        assert!(!user.is_manager());

        logout(&pool, Some(&user)).await.unwrap();
        assert!(resolve(&pool, &jwt, &session.token).await.unwrap().is_none());
        logout(&pool, None).await.unwrap();
    }

    #[tokio::test]
    async fn test_login_failures_are_generic() {
        let pool = test_pool().await;
        let jwt = jwt();
        register(&pool, registration("mario", "pw", "pw")).await.unwrap();

        for form in [
            login_form("mario", "wrong"),
            login_form("nobody", "pw"),
            login_form("", "pw"),
            login_form("mario", ""),
        ] {
            let err = login(&pool, &jwt, &form).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidCredentials);
            assert_eq!(err.message, "Error in Login or Password");
        }
    }

    #[tokio::test]
    async fn test_grant_role() {
        let pool = test_pool().await;
        let registered = register(&pool, registration("boss", "pw", "pw")).await.unwrap();
        grant_role(&pool, "boss", MANAGER_ROLE).await.unwrap();
        assert!(shared::models::is_manager(
            &account::roles(&pool, registered.id).await.unwrap()
        ));

        let err = grant_role(&pool, "ghost", MANAGER_ROLE).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AccountNotFound);
    }

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next(Some("/manager/")), Some("/manager/".to_string()));
        assert_eq!(safe_next(Some("//evil.com")), None);
        assert_eq!(safe_next(Some("https://evil.com")), None);
        assert_eq!(safe_next(Some("/\\evil.com")), None);
        assert_eq!(safe_next(None), None);
    }
}
