//! Manager Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use shared::models::{ContactListPage, ManagerDashboard, ReservationListPage};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::manager;
use crate::utils::{AppError, ErrorCode};

type PageResult<T> = Result<T, Response>;

/// Login redirect for gate failures, plain error response otherwise
fn reject(err: AppError, uri: &Uri) -> Response {
    match err.code {
        ErrorCode::NotAuthenticated | ErrorCode::PermissionDenied => {
            let query = serde_urlencoded::to_string([("next", uri.path())])
                .unwrap_or_else(|_| "next=%2F".to_string());
            Redirect::to(&format!("/login/?{query}")).into_response()
        }
        _ => err.into_response(),
    }
}

/// GET /manager/
pub async fn dashboard(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    uri: Uri,
) -> PageResult<Json<ManagerDashboard>> {
    manager::dashboard(state.pool(), state.settings(), user.as_ref())
        .await
        .map(Json)
        .map_err(|e| reject(e, &uri))
}

/// GET /manager/reservations/
pub async fn reservations(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    uri: Uri,
) -> PageResult<Json<ReservationListPage>> {
    let reservations = manager::list_unprocessed_reservations(state.pool(), user.as_ref())
        .await
        .map_err(|e| reject(e, &uri))?;

    let settings = state.settings();
    Ok(Json(ReservationListPage {
        reservations,
        contact_info: settings.contact_info.clone(),
        footer: settings.footer.clone(),
    }))
}

/// GET /manager/reservations/{id}/process/
pub async fn process_reservation(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    Path(id): Path<i64>,
    uri: Uri,
) -> PageResult<Redirect> {
    manager::mark_reservation_processed(state.pool(), user.as_ref(), id)
        .await
        .map_err(|e| reject(e, &uri))?;
    Ok(Redirect::to("/manager/reservations/"))
}

/// GET /manager/contacts/
pub async fn contacts(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    uri: Uri,
) -> PageResult<Json<ContactListPage>> {
    let contacts = manager::list_unprocessed_contacts(state.pool(), user.as_ref())
        .await
        .map_err(|e| reject(e, &uri))?;

    let settings = state.settings();
    Ok(Json(ContactListPage {
        contacts,
        contact_info: settings.contact_info.clone(),
        footer: settings.footer.clone(),
    }))
}

/// GET /manager/contacts/{id}/process/
pub async fn process_contact(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    Path(id): Path<i64>,
    uri: Uri,
) -> PageResult<Redirect> {
    manager::mark_contact_processed(state.pool(), user.as_ref(), id)
        .await
        .map_err(|e| reject(e, &uri))?;
    Ok(Redirect::to("/manager/contacts/"))
}
