//! Main page handlers

use axum::{Json, body::Bytes, extract::State, response::Redirect};
use shared::models::MainPage;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::{catalog, intake};
use crate::utils::AppResult;

/// GET / - main page context
pub async fn index(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
) -> AppResult<Json<MainPage>> {
    let page = catalog::main_page(state.pool(), state.settings(), user.as_ref()).await?;
    Ok(Json(page))
}

/// POST / - reservation or contact submission
///
/// Success goes back to the main page; validation failures answer 400 with
/// per-field messages.
pub async fn submit(State(state): State<ServerState>, body: Bytes) -> AppResult<Redirect> {
    let submission = intake::Submission::from_urlencoded(&body)?;
    intake::submit(state.pool(), submission).await?;
    Ok(Redirect::to("/"))
}
