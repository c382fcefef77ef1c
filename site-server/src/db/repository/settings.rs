//! Site Settings Repository
//!
//! Returns every row so the caller can enforce the one-row rule.

use super::RepoResult;
use shared::models::{AboutUs, ContactInfo, Footer};
use sqlx::SqlitePool;

pub async fn about_us(pool: &SqlitePool) -> RepoResult<Vec<AboutUs>> {
    let rows = sqlx::query_as::<_, AboutUs>(
        "SELECT id, header, heading_text, photo, video_url FROM about_us ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn contact_info(pool: &SqlitePool) -> RepoResult<Vec<ContactInfo>> {
    let rows = sqlx::query_as::<_, ContactInfo>(
        "SELECT id, header, heading_text, location, open_hours, email, call, \
         phone_for_top_bar, open_hours_for_top_bar FROM contact_info ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn footer(pool: &SqlitePool) -> RepoResult<Vec<Footer>> {
    let rows = sqlx::query_as::<_, Footer>(
        "SELECT id, header, heading_text, twitter, facebook, instagram, skype, linkedin, site_owner \
         FROM footer ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
