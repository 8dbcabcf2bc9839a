//! Employee API Module
//!
//! Employee records are managed elsewhere; this only exposes staffing views.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/employees/{id}/projects", get(handler::projects))
}
