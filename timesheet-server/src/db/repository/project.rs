//! Project Repository

use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::models::{Project, ProjectCreate, ProjectUpdate};
use sqlx::sqlite::SqliteExecutor;
use sqlx::{SqliteConnection, SqlitePool};

use super::{RepoError, RepoResult};
use crate::db::money::{from_cents, to_cents};

const PROJECT_COLUMNS: &str = "id, name, description, nation, cost, created_at, updated_at";

/// Project row as stored (cost in cents)
#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    description: Option<String>,
    nation: String,
    cost: i64,
    created_at: i64,
    updated_at: i64,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            nation: row.nation,
            cost: from_cents(row.cost),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub async fn find_all(executor: impl SqliteExecutor<'_>) -> RepoResult<Vec<Project>> {
    let rows = sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM project ORDER BY id"
    ))
    .fetch_all(executor)
    .await?;
    Ok(rows.into_iter().map(Project::from).collect())
}

pub async fn find_by_id(executor: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<Project>> {
    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "SELECT {PROJECT_COLUMNS} FROM project WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(row.map(Project::from))
}

/// Projects the employee is currently staffed on
pub async fn find_by_employee(
    executor: impl SqliteExecutor<'_>,
    employee_id: i64,
) -> RepoResult<Vec<Project>> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        "SELECT p.id, p.name, p.description, p.nation, p.cost, p.created_at, p.updated_at \
         FROM project p JOIN project_employee pe ON pe.project_id = p.id \
         WHERE pe.employee_id = ? ORDER BY p.id",
    )
    .bind(employee_id)
    .fetch_all(executor)
    .await?;
    Ok(rows.into_iter().map(Project::from).collect())
}

pub async fn create(pool: &SqlitePool, data: ProjectCreate) -> RepoResult<Project> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(RepoError::Validation("Project name is required".into()));
    }
    let nation = data.nation.as_deref().map(str::trim).unwrap_or_default();
    if nation.is_empty() {
        return Err(RepoError::Business(
            ErrorCode::RequiredField,
            "nation is required".into(),
        ));
    }
    let opening_cost = to_cents(data.opening_cost.unwrap_or(Decimal::ZERO))?;
    let now = shared::util::now_millis();

    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "INSERT INTO project (name, description, nation, cost, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING {PROJECT_COLUMNS}"
    ))
    .bind(name)
    .bind(&data.description)
    .bind(nation)
    .bind(opening_cost)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::info!(project_id = row.id, nation = %row.nation, "Project created");
    Ok(row.into())
}

/// Update descriptive fields. Cost and nation are not touched here.
pub async fn update(pool: &SqlitePool, id: i64, data: ProjectUpdate) -> RepoResult<Project> {
    if let Some(name) = &data.name
        && name.trim().is_empty()
    {
        return Err(RepoError::Validation("Project name is required".into()));
    }
    let now = shared::util::now_millis();

    let row = sqlx::query_as::<_, ProjectRow>(&format!(
        "UPDATE project SET name = COALESCE(?1, name), description = COALESCE(?2, description), \
         updated_at = ?3 WHERE id = ?4 RETURNING {PROJECT_COLUMNS}"
    ))
    .bind(data.name.as_deref().map(str::trim))
    .bind(&data.description)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Project {id} not found")))?;

    Ok(row.into())
}

/// Delete a project; its staffing links go with it
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM project WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Move the accrued cost by `delta` in one statement and return the stored result.
///
/// The increment happens inside the store, so two transactions adjusting the
/// same project serialize on the row instead of overwriting each other.
pub async fn adjust_cost(
    conn: &mut SqliteConnection,
    id: i64,
    delta: Decimal,
) -> RepoResult<Decimal> {
    let delta = to_cents(delta)?;
    let now = shared::util::now_millis();

    let cost: i64 = sqlx::query_scalar(
        "UPDATE project SET cost = cost + ?1, updated_at = ?2 WHERE id = ?3 RETURNING cost",
    )
    .bind(delta)
    .bind(now)
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Project {id} not found")))?;

    Ok(from_cents(cost))
}

/// Take the write lock on a project row and return its current nation.
///
/// SQLite has no `SELECT ... FOR UPDATE`; touching the row makes this the
/// transaction's first write, so later reads in the same transaction cannot
/// be invalidated by another writer.
pub async fn lock(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<String>> {
    let nation: Option<String> =
        sqlx::query_scalar("UPDATE project SET updated_at = ?1 WHERE id = ?2 RETURNING nation")
            .bind(shared::util::now_millis())
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
    Ok(nation)
}

pub async fn set_nation(conn: &mut SqliteConnection, id: i64, nation: &str) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE project SET nation = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(nation)
        .bind(now)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Project {id} not found")));
    }
    Ok(())
}
