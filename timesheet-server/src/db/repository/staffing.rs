//! Staffing Repository (project_employee)

use shared::models::StaffingLink;
use sqlx::SqliteConnection;
use sqlx::sqlite::SqliteExecutor;

use super::RepoResult;

/// Everything needed to price one staffing link, in stored cents.
///
/// Carries no cost: the stored value comes back from `project::adjust_cost`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StaffingPricing {
    pub nation: String,
    pub pay_rate_sg: i64,
    pub pay_rate_vn: i64,
}

/// Linked employee joined with their role, rates in stored cents
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StaffRow {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: i64,
    pub role_name: String,
    pub is_manager: bool,
    pub pay_rate_sg: i64,
    pub pay_rate_vn: i64,
    pub assigned_at: i64,
}

/// Staff count and summed rates of a project, in stored cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct RateTotals {
    pub staff_count: i64,
    pub sum_sg: i64,
    pub sum_vn: i64,
}

/// Insert a link. A second link for the same pair fails with `RepoError::Duplicate`,
/// an unknown employee or project with `RepoError::NotFound`.
pub async fn insert_link(
    conn: &mut SqliteConnection,
    employee_id: i64,
    project_id: i64,
    is_manager: bool,
    assigned_at: i64,
) -> RepoResult<StaffingLink> {
    let link = sqlx::query_as::<_, StaffingLink>(
        "INSERT INTO project_employee (employee_id, project_id, is_manager, assigned_at) \
         VALUES (?1, ?2, ?3, ?4) \
         RETURNING employee_id, project_id, is_manager, assigned_at",
    )
    .bind(employee_id)
    .bind(project_id)
    .bind(is_manager)
    .bind(assigned_at)
    .fetch_one(&mut *conn)
    .await?;
    Ok(link)
}

/// Project nation with the linked employee's role rates.
///
/// Goes through the link, so `None` covers a missing link, employee, project
/// or role alike.
pub async fn find_pricing(
    conn: &mut SqliteConnection,
    employee_id: i64,
    project_id: i64,
) -> RepoResult<Option<StaffingPricing>> {
    let pricing = sqlx::query_as::<_, StaffingPricing>(
        "SELECT p.nation, r.pay_rate_sg, r.pay_rate_vn \
         FROM project_employee pe \
         JOIN project p ON p.id = pe.project_id \
         JOIN employee e ON e.id = pe.employee_id \
         JOIN role r ON r.id = e.role_id \
         WHERE pe.employee_id = ?1 AND pe.project_id = ?2",
    )
    .bind(employee_id)
    .bind(project_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(pricing)
}

pub async fn delete_link(
    conn: &mut SqliteConnection,
    employee_id: i64,
    project_id: i64,
) -> RepoResult<bool> {
    let rows =
        sqlx::query("DELETE FROM project_employee WHERE employee_id = ?1 AND project_id = ?2")
            .bind(employee_id)
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn list_staff(
    executor: impl SqliteExecutor<'_>,
    project_id: i64,
) -> RepoResult<Vec<StaffRow>> {
    let rows = sqlx::query_as::<_, StaffRow>(
        "SELECT e.id AS employee_id, e.first_name, e.last_name, e.email, \
                r.id AS role_id, r.name AS role_name, pe.is_manager, \
                r.pay_rate_sg, r.pay_rate_vn, pe.assigned_at \
         FROM project_employee pe \
         JOIN employee e ON e.id = pe.employee_id \
         JOIN role r ON r.id = e.role_id \
         WHERE pe.project_id = ? \
         ORDER BY pe.assigned_at, e.id",
    )
    .bind(project_id)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Rates of every linked employee summed per nation column
pub async fn rate_totals(
    executor: impl SqliteExecutor<'_>,
    project_id: i64,
) -> RepoResult<RateTotals> {
    let totals = sqlx::query_as::<_, RateTotals>(
        "SELECT COUNT(pe.employee_id) AS staff_count, \
                COALESCE(SUM(r.pay_rate_sg), 0) AS sum_sg, \
                COALESCE(SUM(r.pay_rate_vn), 0) AS sum_vn \
         FROM project_employee pe \
         JOIN employee e ON e.id = pe.employee_id \
         LEFT JOIN role r ON r.id = e.role_id \
         WHERE pe.project_id = ?",
    )
    .bind(project_id)
    .fetch_one(executor)
    .await?;
    Ok(totals)
}

pub async fn employee_exists(executor: impl SqliteExecutor<'_>, employee_id: i64) -> RepoResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM employee WHERE id = ?")
        .bind(employee_id)
        .fetch_optional(executor)
        .await?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::RepoError;

    async fn seed(db: &DbService) {
        sqlx::raw_sql(
            "INSERT INTO role (id, name, pay_rate_sg, pay_rate_vn) VALUES (1, 'Engineer', 15000, 10000); \
             INSERT INTO employee (id, first_name, last_name, email, role_id) \
                 VALUES (1, 'Mei', 'Tan', 'mei@example.com', 1); \
             INSERT INTO employee (id, first_name, last_name, email, role_id) \
                 VALUES (2, 'An', 'Nguyen', 'an@example.com', NULL); \
             INSERT INTO project (id, name, nation, cost) VALUES (1, 'Harbour', 'Singapore', 100000);",
        )
        .execute(&db.pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_insert_and_price_link() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let mut conn = db.pool.acquire().await.unwrap();

        let link = insert_link(&mut conn, 1, 1, true, 42).await.unwrap();
        assert_eq!(
            link,
            StaffingLink {
                employee_id: 1,
                project_id: 1,
                is_manager: true,
                assigned_at: 42
            }
        );

        let pricing = find_pricing(&mut conn, 1, 1).await.unwrap().unwrap();
        assert_eq!(
            pricing,
            StaffingPricing {
                nation: "Singapore".into(),
                pay_rate_sg: 15000,
                pay_rate_vn: 10000,
            }
        );
    }

    #[tokio::test]
    async fn test_insert_link_twice_is_duplicate() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let mut conn = db.pool.acquire().await.unwrap();

        insert_link(&mut conn, 1, 1, false, 0).await.unwrap();
        let err = insert_link(&mut conn, 1, 1, false, 0).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_insert_link_unknown_employee_is_not_found() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let mut conn = db.pool.acquire().await.unwrap();

        let err = insert_link(&mut conn, 99, 1, false, 0).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_pricing_requires_role() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let mut conn = db.pool.acquire().await.unwrap();

        insert_link(&mut conn, 2, 1, false, 0).await.unwrap();
        assert!(find_pricing(&mut conn, 2, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_totals_and_staff_listing() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let mut conn = db.pool.acquire().await.unwrap();

        assert_eq!(rate_totals(&mut *conn, 1).await.unwrap(), RateTotals::default());

        insert_link(&mut conn, 1, 1, true, 1).await.unwrap();
        let totals = rate_totals(&mut *conn, 1).await.unwrap();
        assert_eq!(totals.staff_count, 1);
        assert_eq!(totals.sum_sg, 15000);
        assert_eq!(totals.sum_vn, 10000);

        let staff = list_staff(&mut *conn, 1).await.unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].role_name, "Engineer");
        assert!(staff[0].is_manager);

        assert!(delete_link(&mut conn, 1, 1).await.unwrap());
        assert!(!delete_link(&mut conn, 1, 1).await.unwrap());
    }

    #[tokio::test]
    async fn test_employee_exists() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        assert!(employee_exists(&db.pool, 1).await.unwrap());
        assert!(!employee_exists(&db.pool, 7).await.unwrap());
    }
}
