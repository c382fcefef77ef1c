//! Account Repository
//!
//! Accounts plus their role grants. Password hashes never leave this
//! module except through [`AccountCredentials`].

use std::collections::BTreeSet;

use super::{RepoError, RepoResult};
use shared::models::Account;
use sqlx::SqlitePool;

/// Account row including the password hash (login only)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountCredentials {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Insert a new account
///
/// A taken username surfaces as [`RepoError::Duplicate`].
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    created_at: i64,
) -> RepoResult<Account> {
    let row = sqlx::query_as::<_, Account>(
        "INSERT INTO account (username, password_hash, created_at) VALUES (?, ?, ?) \
         RETURNING id, username, created_at",
    )
    .bind(username)
    .bind(password_hash)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::Duplicate(format!("username '{username}'")),
        other => other,
    })?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Account>> {
    let row = sqlx::query_as::<_, Account>(
        "SELECT id, username, created_at FROM account WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Look up login credentials by exact username
pub async fn find_credentials(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<AccountCredentials>> {
    let row = sqlx::query_as::<_, AccountCredentials>(
        "SELECT id, username, password_hash FROM account WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM account")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Role names granted to an account
pub async fn roles(pool: &SqlitePool, account_id: i64) -> RepoResult<BTreeSet<String>> {
    let rows: Vec<String> =
        sqlx::query_scalar("SELECT role FROM account_role WHERE account_id = ?")
            .bind(account_id)
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().collect())
}

/// Grant a role; granting an existing role is a no-op
pub async fn grant_role(pool: &SqlitePool, account_id: i64, role: &str) -> RepoResult<()> {
    sqlx::query("INSERT OR IGNORE INTO account_role (account_id, role) VALUES (?, ?)")
        .bind(account_id)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(())
}

/// Revoke a role; returns whether the account held it
pub async fn revoke_role(pool: &SqlitePool, account_id: i64, role: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM account_role WHERE account_id = ? AND role = ?")
        .bind(account_id)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;
    use shared::models::MANAGER_ROLE;

    #[tokio::test]
    async fn test_create_and_lookup() {
        let pool = test_pool().await;
        let account = create(&pool, "mario", "$hash", 5).await.unwrap();
        assert_eq!(account.username, "mario");

        let creds = find_credentials(&pool, "mario").await.unwrap().unwrap();
        assert_eq!(creds.id, account.id);
        assert_eq!(creds.password_hash, "$hash");
        assert!(find_credentials(&pool, "luigi").await.unwrap().is_none());
        assert_eq!(find_by_id(&pool, account.id).await.unwrap().unwrap().created_at, 5);
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let pool = test_pool().await;
        create(&pool, "mario", "$a", 1).await.unwrap();
        let err = create(&pool, "mario", "$b", 2).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_roles() {
        let pool = test_pool().await;
        let account = create(&pool, "boss", "$h", 1).await.unwrap();
        assert!(roles(&pool, account.id).await.unwrap().is_empty());

        grant_role(&pool, account.id, MANAGER_ROLE).await.unwrap();
        grant_role(&pool, account.id, MANAGER_ROLE).await.unwrap();
        let granted = roles(&pool, account.id).await.unwrap();
        assert_eq!(granted.len(), 1);
        assert!(shared::models::is_manager(&granted));

        assert!(revoke_role(&pool, account.id, MANAGER_ROLE).await.unwrap());
        assert!(!revoke_role(&pool, account.id, MANAGER_ROLE).await.unwrap());
        assert!(roles(&pool, account.id).await.unwrap().is_empty());
    }
}
