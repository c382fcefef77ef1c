//! Account routes
//!
//! - /registration/: page + register
//! - /login/: page + log in
//! - /logout/: always public

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/registration/",
            get(handler::registration_page).post(handler::register),
        )
        .route("/login/", get(handler::login_page).post(handler::login))
        .route("/logout/", get(handler::logout))
}
