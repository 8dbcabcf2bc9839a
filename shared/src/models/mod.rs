//! Data models
//!
//! Shared between the server and the front end (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Money is `Decimal` with two decimal places; all IDs are `i64`.

pub mod project;
pub mod staffing;

// Re-exports
pub use project::*;
pub use staffing::*;
