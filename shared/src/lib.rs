//! Shared types for the restaurant site
//!
//! Models, form validation, the unified error system and small utilities
//! used by the server and its tools.

pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
