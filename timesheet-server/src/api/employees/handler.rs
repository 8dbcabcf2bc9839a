//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{ApiResponse, AppResult};
use shared::models::Project;

use crate::core::ServerState;

/// GET /api/employees/{id}/projects - Projects the employee is staffed on
pub async fn projects(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let projects = state.staffing.projects_for_employee(id).await?;
    Ok(Json(ApiResponse::success(projects)))
}
