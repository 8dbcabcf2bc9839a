//! Shared types for the timesheet service
//!
//! Error codes, the API response envelope and the data models exchanged
//! between the server and its front end.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
