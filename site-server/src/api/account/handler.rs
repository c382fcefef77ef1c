//! Account Handlers
//!
//! Registration, login and logout.

use std::time::Duration;

use axum::{
    Form, Json,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use http::header::SET_COOKIE;
use shared::models::{AuthPage, LoginForm, RegisteredAccount, RegistrationForm};

use crate::api::NextQuery;
use crate::auth::CurrentUser;
use crate::auth::session::{clear_session_cookie, session_cookie};
use crate::core::ServerState;
use crate::services::{accounts, catalog};
use crate::utils::{ApiResponse, AppResult};

/// Response header carrying the raw session token for bearer clients
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

fn auth_page(state: &ServerState, user: Option<&CurrentUser>, next: Option<String>) -> AuthPage {
    let settings = state.settings();
    AuthPage {
        user: catalog::user_flags(user),
        next,
        contact_info: settings.contact_info.clone(),
        footer: settings.footer.clone(),
    }
}

/// GET /registration/
pub async fn registration_page(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    Query(query): Query<NextQuery>,
) -> Json<AuthPage> {
    let next = accounts::safe_next(query.next.as_deref());
    Json(auth_page(&state, user.as_ref(), next))
}

/// POST /registration/
pub async fn register(
    State(state): State<ServerState>,
    Form(form): Form<RegistrationForm>,
) -> AppResult<Json<ApiResponse<RegisteredAccount>>> {
    let account = accounts::register(state.pool(), form).await?;
    Ok(Json(ApiResponse::success(account)))
}

/// GET /login/
pub async fn login_page(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
    Query(query): Query<NextQuery>,
) -> Json<AuthPage> {
    let next = accounts::safe_next(query.next.as_deref());
    Json(auth_page(&state, user.as_ref(), next))
}

/// POST /login/
///
/// Sets the session cookie and redirects to `next` (query first, then
/// form) or `/`.
pub async fn login(
    State(state): State<ServerState>,
    Query(query): Query<NextQuery>,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    // Fixed delay to blunt timing attacks, applied to every outcome
    tokio::time::sleep(Duration::from_millis(state.config.auth_delay_ms)).await;

    let jwt = state.get_jwt_service();
    let session = accounts::login(state.pool(), &jwt, &form).await?;

    let next = accounts::safe_next(query.next.as_deref())
        .or_else(|| accounts::safe_next(form.next.as_deref()))
        .unwrap_or_else(|| "/".to_string());

    Ok((
        AppendHeaders([
            (SET_COOKIE, session_cookie(&session.token, session.max_age_secs)),
            (
                http::HeaderName::from_static(SESSION_TOKEN_HEADER),
                session.token,
            ),
        ]),
        Redirect::to(&next),
    )
        .into_response())
}

/// GET /logout/
pub async fn logout(
    State(state): State<ServerState>,
    user: Option<CurrentUser>,
) -> AppResult<Response> {
    accounts::logout(state.pool(), user.as_ref()).await?;
    Ok((
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Redirect::to("/"),
    )
        .into_response())
}
