//! Manager routes
//!
//! Every route requires the manager role; visitors who fail the check are
//! sent to the login page with `next` pointing back here.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/manager/", get(handler::dashboard))
        .route("/manager/reservations/", get(handler::reservations))
        .route(
            "/manager/reservations/{id}/process/",
            get(handler::process_reservation),
        )
        .route("/manager/contacts/", get(handler::contacts))
        .route(
            "/manager/contacts/{id}/process/",
            get(handler::process_contact),
        )
}
