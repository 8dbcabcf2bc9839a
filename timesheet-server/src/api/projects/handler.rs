//! Project API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    CostAudit, NationChange, Project, ProjectCreate, ProjectStaffMember, ProjectUpdate,
};

use crate::core::ServerState;
use crate::db::repository::{RepoError, project};

/// Map repository validation failures onto project codes
fn project_error(err: RepoError) -> AppError {
    match err {
        RepoError::Validation(msg) => AppError::with_message(ErrorCode::ProjectNameRequired, msg),
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::ProjectNotFound, msg),
        other => other.into(),
    }
}

fn not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ProjectNotFound, format!("Project {id} not found"))
        .with_detail("project_id", id)
}

/// GET /api/projects - List all projects
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let projects = project::find_all(&state.pool).await?;
    Ok(Json(ApiResponse::success(projects)))
}

/// GET /api/projects/{id} - Get project by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let project = project::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::success(project)))
}

/// POST /api/projects - Create a project
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProjectCreate>,
) -> AppResult<Json<ApiResponse<Project>>> {
    if payload.nation.as_deref().is_none_or(|n| n.trim().is_empty()) {
        return Err(AppError::required_field("nation"));
    }
    let project = project::create(&state.pool, payload)
        .await
        .map_err(project_error)?;
    Ok(Json(ApiResponse::success_with_message("Project created", project)))
}

/// PUT /api/projects/{id} - Update name and description
///
/// Cost only moves through staffing, so a body carrying `cost` is refused.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectUpdate>,
) -> AppResult<Json<ApiResponse<Project>>> {
    if payload.cost.is_some() {
        tracing::warn!(project_id = id, "Rejected direct write to project cost");
        return Err(AppError::new(ErrorCode::ProjectCostReadOnly).with_detail("field", "cost"));
    }
    let project = project::update(&state.pool, id, payload)
        .await
        .map_err(project_error)?;
    Ok(Json(ApiResponse::success(project)))
}

/// DELETE /api/projects/{id} - Delete a project and its staffing links
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !project::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(ApiResponse::ok()))
}

/// GET /api/projects/{id}/employees - Current staff with effective pay rate
pub async fn staff(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<ProjectStaffMember>>>> {
    let staff = state.staffing.list_staff(id).await?;
    Ok(Json(ApiResponse::success(staff)))
}

/// PUT /api/projects/{id}/nation - Change nation and re-price cost
pub async fn change_nation(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<NationChange>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let project = state.staffing.change_nation(id, payload).await?;
    Ok(Json(ApiResponse::success(project)))
}

/// GET /api/projects/{id}/cost-audit - Stored cost against staffed sum
pub async fn cost_audit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<CostAudit>>> {
    let audit = state.staffing.audit_cost(id).await?;
    Ok(Json(ApiResponse::success(audit)))
}
