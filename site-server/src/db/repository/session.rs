//! Session Repository
//!
//! Server-side half of a login. A JWT names a session id; the session row
//! must still exist and be unexpired for the token to count.

use super::RepoResult;
use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRow {
    pub id: String,
    pub account_id: i64,
    pub created_at: i64,
    pub expires_at: i64,
}

pub async fn create(
    pool: &SqlitePool,
    id: &str,
    account_id: i64,
    created_at: i64,
    expires_at: i64,
) -> RepoResult<SessionRow> {
    let row = sqlx::query_as::<_, SessionRow>(
        "INSERT INTO session (id, account_id, created_at, expires_at) VALUES (?, ?, ?, ?) \
         RETURNING id, account_id, created_at, expires_at",
    )
    .bind(id)
    .bind(account_id)
    .bind(created_at)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Session that exists and has not expired at `now`
pub async fn find_live(pool: &SqlitePool, id: &str, now: i64) -> RepoResult<Option<SessionRow>> {
    let row = sqlx::query_as::<_, SessionRow>(
        "SELECT id, account_id, created_at, expires_at FROM session WHERE id = ? AND expires_at > ?",
    )
    .bind(id)
    .bind(now)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM session WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Drop every session expired at `now`; returns how many were removed
pub async fn purge_expired(pool: &SqlitePool, now: i64) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM session WHERE expires_at <= ?")
        .bind(now)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
