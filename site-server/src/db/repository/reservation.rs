//! Reservation Request Repository

use super::RepoResult;
use shared::models::{NewReservation, ReservationRequest};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, email, phone, date_reservation, time_reservation, persons, message, created_at, is_processed";

/// Insert an unprocessed reservation stamped with `created_at`
pub async fn create(
    pool: &SqlitePool,
    data: &NewReservation,
    created_at: i64,
) -> RepoResult<ReservationRequest> {
    let sql = format!(
        "INSERT INTO reservation_request \
         (name, email, phone, date_reservation, time_reservation, persons, message, created_at, is_processed) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0) RETURNING {COLUMNS}"
    );
    let row = sqlx::query_as::<_, ReservationRequest>(&sql)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.date_reservation)
        .bind(&data.time_reservation)
        .bind(data.persons)
        .bind(&data.message)
        .bind(created_at)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ReservationRequest>> {
    let sql = format!("SELECT {COLUMNS} FROM reservation_request WHERE id = ?");
    let row = sqlx::query_as::<_, ReservationRequest>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Unprocessed reservations, newest first
pub async fn find_unprocessed(pool: &SqlitePool) -> RepoResult<Vec<ReservationRequest>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM reservation_request WHERE is_processed = 0 ORDER BY created_at DESC, id DESC"
    );
    let rows = sqlx::query_as::<_, ReservationRequest>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn count_unprocessed(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM reservation_request WHERE is_processed = 0")
            .fetch_one(pool)
            .await?;
    Ok(count)
}

/// Flip `is_processed` to true
///
/// Returns whether a row changed; an unknown or already processed id is a no-op.
pub async fn mark_processed(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE reservation_request SET is_processed = 1 WHERE id = ? AND is_processed = 0",
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
