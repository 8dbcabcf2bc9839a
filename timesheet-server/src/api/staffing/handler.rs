//! Staffing API Handlers

use axum::{Json, extract::State};
use shared::error::{ApiResponse, AppResult};
use shared::models::{AssignEmployee, Assignment, UnassignEmployee, Unassignment};

use crate::core::ServerState;

/// POST /api/staffing/assign - Staff an employee on a project
pub async fn assign(
    State(state): State<ServerState>,
    Json(payload): Json<AssignEmployee>,
) -> AppResult<Json<ApiResponse<Assignment>>> {
    let assignment = state.staffing.assign(payload).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Employee added to project",
        assignment,
    )))
}

/// POST /api/staffing/unassign - Remove an employee from a project
pub async fn unassign(
    State(state): State<ServerState>,
    Json(payload): Json<UnassignEmployee>,
) -> AppResult<Json<ApiResponse<Unassignment>>> {
    let removed = state.staffing.unassign(payload).await?;
    Ok(Json(ApiResponse::success_with_message(
        removed.message.clone(),
        removed,
    )))
}
