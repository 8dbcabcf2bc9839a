//! Staffing API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Staffing router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staffing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/assign", post(handler::assign))
        .route("/unassign", post(handler::unassign))
}
