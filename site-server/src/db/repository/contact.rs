//! Contact Request Repository

use super::RepoResult;
use shared::models::{ContactRequest, NewContact};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, subject, message, created_at, is_processed";

pub async fn create(
    pool: &SqlitePool,
    data: &NewContact,
    created_at: i64,
) -> RepoResult<ContactRequest> {
    let sql = format!(
        "INSERT INTO contact_request (name, email, subject, message, created_at, is_processed) \
         VALUES (?, ?, ?, ?, ?, 0) RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, ContactRequest>(&sql)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.subject)
        .bind(&data.message)
        .bind(created_at)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ContactRequest>> {
    let sql = format!("SELECT {COLUMNS} FROM contact_request WHERE id = ?");
    let row = sqlx::query_as::<_, ContactRequest>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Unprocessed contact requests, newest first
pub async fn find_unprocessed(pool: &SqlitePool) -> RepoResult<Vec<ContactRequest>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM contact_request WHERE is_processed = 0 ORDER BY created_at DESC, id DESC"
    );
    let rows = sqlx::query_as::<_, ContactRequest>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn count_unprocessed(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_request WHERE is_processed = 0")
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub async fn mark_processed(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result =
        sqlx::query("UPDATE contact_request SET is_processed = 1 WHERE id = ? AND is_processed = 0")
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;

    fn sample(subject: &str) -> NewContact {
        NewContact {
            name: "Ana".to_string(),
            email: "ana@mail.es".to_string(),
            subject: subject.to_string(),
            message: Some("hello".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = test_pool().await;
        let first = create(&pool, &sample("first"), 10).await.unwrap();
        let second = create(&pool, &sample("second"), 20).await.unwrap();
        assert!(!first.is_processed);

        let list = find_unprocessed(&pool).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, second.id);
        assert_eq!(list[1].id, first.id);
    }

    #[tokio::test]
    async fn test_mark_processed_removes_from_list() {
        let pool = test_pool().await;
        let row = create(&pool, &sample("s"), 10).await.unwrap();
        assert!(mark_processed(&pool, row.id).await.unwrap());
        assert_eq!(count_unprocessed(&pool).await.unwrap(), 0);
        assert!(find_by_id(&pool, row.id).await.unwrap().unwrap().is_processed);
        assert!(!mark_processed(&pool, 999).await.unwrap());
    }
}
