//! Manager workflow
//!
//! Unprocessed requests can be listed and flipped to processed, one way
//! only. Every operation requires an account holding the manager role.

use shared::models::{ContactRequest, ManagerDashboard, ReservationRequest, SiteSettings};
use sqlx::SqlitePool;

use crate::auth::CurrentUser;
use crate::db::repository::{contact, reservation};
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Manager gate
///
/// No identity is `NotAuthenticated`; an identity without the manager role
/// is `PermissionDenied`.
pub fn require_manager(user: Option<&CurrentUser>) -> AppResult<&CurrentUser> {
    let user = user.ok_or_else(AppError::not_authenticated)?;
    if !user.is_manager() {
        security_log!(
            "WARN",
            "manager_required",
            account_id = user.account_id,
            username = user.username.clone()
        );
        return Err(AppError::permission_denied("Manager role required"));
    }
    Ok(user)
}

pub async fn dashboard(
    pool: &SqlitePool,
    settings: &SiteSettings,
    user: Option<&CurrentUser>,
) -> AppResult<ManagerDashboard> {
    require_manager(user)?;
    Ok(ManagerDashboard {
        pending_reservations: reservation::count_unprocessed(pool).await?,
        pending_contacts: contact::count_unprocessed(pool).await?,
        contact_info: settings.contact_info.clone(),
        footer: settings.footer.clone(),
    })
}

pub async fn list_unprocessed_reservations(
    pool: &SqlitePool,
    user: Option<&CurrentUser>,
) -> AppResult<Vec<ReservationRequest>> {
    require_manager(user)?;
    Ok(reservation::find_unprocessed(pool).await?)
}

pub async fn list_unprocessed_contacts(
    pool: &SqlitePool,
    user: Option<&CurrentUser>,
) -> AppResult<Vec<ContactRequest>> {
    require_manager(user)?;
    Ok(contact::find_unprocessed(pool).await?)
}

/// Mark a reservation processed; unknown ids are ignored
pub async fn mark_reservation_processed(
    pool: &SqlitePool,
    user: Option<&CurrentUser>,
    id: i64,
) -> AppResult<()> {
    let manager = require_manager(user)?;
    if reservation::mark_processed(pool, id).await? {
        tracing::info!(reservation_id = id, by = %manager.username, "Reservation processed");
    }
    Ok(())
}

/// Mark a contact request processed; unknown ids are ignored
pub async fn mark_contact_processed(
    pool: &SqlitePool,
    user: Option<&CurrentUser>,
    id: i64,
) -> AppResult<()> {
    let manager = require_manager(user)?;
    if contact::mark_processed(pool, id).await? {
        tracing::info!(contact_id = id, by = %manager.username, "Contact request processed");
    }
    Ok(())
}
