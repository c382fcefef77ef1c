//! Site settings
//!
//! About-us, contact info and footer each live in a one-row table. They
//! are read once at startup; any other row count stops the server.

use shared::error::ErrorCode;
use shared::models::SiteSettings;
use sqlx::SqlitePool;

use crate::db::repository::settings;
use crate::utils::{AppError, AppResult};

fn exactly_one<T>(mut rows: Vec<T>, table: &str) -> AppResult<T> {
    match rows.len() {
        0 => Err(AppError::with_message(
            ErrorCode::SettingsMissing,
            format!("No row in '{table}'"),
        )),
        1 => rows
            .pop()
            .ok_or_else(|| AppError::internal(format!("Row vanished from '{table}'"))),
        n => Err(AppError::with_message(
            ErrorCode::SettingsDuplicated,
            format!("Expected one row in '{table}', found {n}"),
        )),
    }
}

pub async fn load_site_settings(pool: &SqlitePool) -> AppResult<SiteSettings> {
    let about_us = exactly_one(settings::about_us(pool).await?, "about_us")?;
    let contact_info = exactly_one(settings::contact_info(pool).await?, "contact_info")?;
    let footer = exactly_one(settings::footer(pool).await?, "footer")?;

    Ok(SiteSettings {
        about_us,
        contact_info,
        footer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_pool;

    #[tokio::test]
    async fn test_seeded_settings_load() {
        let pool = test_pool().await;
        let loaded = load_site_settings(&pool).await.unwrap();
        assert_eq!(loaded.about_us.id, 1);
        assert_eq!(loaded.footer.header, "Restaurant");
    }

    #[tokio::test]
    async fn test_missing_row() {
        let pool = test_pool().await;
        sqlx::query("DELETE FROM footer").execute(&pool).await.unwrap();
        let err = load_site_settings(&pool).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SettingsMissing);
    }

    #[tokio::test]
    async fn test_duplicated_row() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO contact_info (id, header) VALUES (2, 'Again')")
            .execute(&pool)
            .await
            .unwrap();
        let err = load_site_settings(&pool).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SettingsDuplicated);
    }
}
