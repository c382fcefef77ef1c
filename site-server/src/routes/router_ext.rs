//! Router extension for oneshot calls
//!
//! Drives the router directly without the network stack (tests, tools).

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::{Request, Response};
use tower::Service;

use crate::core::ServerState;

/// Result type for oneshot calls
pub type OneshotResult = Result<Response<Body>>;

#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process one request
    ///
    /// ```ignore
    /// let mut app = build_app(&state);
    /// let request = Request::builder().uri("/health").body(Body::empty())?;
    /// let response = app.oneshot(&state, request).await?;
    /// ```
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
