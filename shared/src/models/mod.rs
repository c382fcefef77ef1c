//! Data models
//!
//! Shared between site-server and page scripts (via JSON).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), all timestamps epoch millis.

pub mod account;
pub mod catalog;
pub mod contact;
pub mod page;
pub mod reservation;
pub mod settings;

// Re-exports
pub use account::*;
pub use catalog::*;
pub use contact::*;
pub use page::*;
pub use reservation::*;
pub use settings::*;
