//! Staffing Service
//!
//! Owns the employee ↔ project links and keeps `project.cost` equal to the
//! opening balance plus the pay rate of every linked employee under the
//! project's nation. Each operation is one SQLite transaction:
//!
//! 1. the first statement is a write, so the transaction holds the database
//!    write lock before it reads anything it later relies on
//! 2. cost moves by an in-store increment (`cost = cost + ?`), never by
//!    writing back a value read earlier
//! 3. any error, including the timeout, rolls the whole transaction back

use rust_decimal::Decimal;
use shared::models::{
    Assignment, AssignEmployee, CostAudit, NationChange, Project, ProjectStaffMember,
    UnassignEmployee, Unassignment,
};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tokio::time::error::Elapsed;

use super::pricing::RateRegion;
use super::{StaffingError, StaffingPolicy};
use crate::db::money::from_cents;
use crate::db::repository::{RepoError, project, staffing};

type Result<T> = std::result::Result<T, StaffingError>;

#[derive(Clone)]
pub struct StaffingService {
    pool: SqlitePool,
    policy: StaffingPolicy,
}

impl StaffingService {
    pub fn new(pool: SqlitePool, policy: StaffingPolicy) -> Self {
        Self { pool, policy }
    }

    pub fn policy(&self) -> StaffingPolicy {
        self.policy
    }

    /// Link an employee to a project and add their pay rate to the project cost
    pub async fn assign(&self, req: AssignEmployee) -> Result<Assignment> {
        let employee_id = req.employee_id.ok_or(StaffingError::MissingField("employee_id"))?;
        let project_id = req.project_id.ok_or(StaffingError::MissingField("project_id"))?;
        let is_manager = req.is_manager.unwrap_or(false);

        let mut tx = self.begin().await?;
        let outcome = tokio::time::timeout(
            self.policy.tx_timeout,
            self.assign_steps(&mut tx, employee_id, project_id, is_manager),
        )
        .await;
        let assignment = finish(tx, outcome, "assign").await?;

        tracing::info!(
            employee_id,
            project_id,
            is_manager,
            new_cost = %assignment.new_cost,
            "Employee assigned to project"
        );
        Ok(assignment)
    }

    /// Remove a link and subtract the employee's pay rate from the project cost
    pub async fn unassign(&self, req: UnassignEmployee) -> Result<Unassignment> {
        let employee_id = req.employee_id.ok_or(StaffingError::MissingField("employee_id"))?;
        let project_id = req.project_id.ok_or(StaffingError::MissingField("project_id"))?;

        let mut tx = self.begin().await?;
        let outcome = tokio::time::timeout(
            self.policy.tx_timeout,
            self.unassign_steps(&mut tx, employee_id, project_id),
        )
        .await;
        let new_cost = finish(tx, outcome, "unassign").await?;

        tracing::info!(employee_id, project_id, new_cost = %new_cost, "Employee removed from project");
        Ok(Unassignment {
            message: "Employee removed from project".into(),
            employee_id,
            project_id,
            new_cost,
        })
    }

    /// Change a project's nation and re-price its accrued cost.
    ///
    /// Cost moves by the difference between the staff's summed rates under
    /// the new and the old nation, so the staffed share of the cost stays
    /// consistent with the selector.
    pub async fn change_nation(&self, project_id: i64, req: NationChange) -> Result<Project> {
        let nation = req.nation.trim().to_string();
        if nation.is_empty() {
            return Err(StaffingError::MissingField("nation"));
        }

        let mut tx = self.begin().await?;
        let outcome = tokio::time::timeout(
            self.policy.tx_timeout,
            self.change_nation_steps(&mut tx, project_id, &nation),
        )
        .await;
        let project = finish(tx, outcome, "change_nation").await?;

        tracing::info!(project_id, nation = %project.nation, new_cost = %project.cost, "Project nation changed");
        Ok(project)
    }

    /// Compare the stored cost with the sum of current staff rates
    pub async fn audit_cost(&self, project_id: i64) -> Result<CostAudit> {
        let mut tx = self.begin().await?;
        let outcome =
            tokio::time::timeout(self.policy.tx_timeout, audit_steps(&mut tx, project_id)).await;
        let audit = finish(tx, outcome, "audit_cost").await?;

        if !audit.drift.is_zero() {
            tracing::debug!(project_id, drift = %audit.drift, "Project cost differs from staffed sum");
        }
        Ok(audit)
    }

    /// Current staff of a project, each priced under the project's nation
    pub async fn list_staff(&self, project_id: i64) -> Result<Vec<ProjectStaffMember>> {
        let mut tx = self.begin().await?;
        let outcome =
            tokio::time::timeout(self.policy.tx_timeout, staff_steps(&mut tx, project_id)).await;
        finish(tx, outcome, "list_staff").await
    }

    /// Projects an employee is staffed on
    pub async fn projects_for_employee(&self, employee_id: i64) -> Result<Vec<Project>> {
        if !staffing::employee_exists(&self.pool, employee_id).await? {
            return Err(StaffingError::NotFound);
        }
        Ok(project::find_by_employee(&self.pool, employee_id).await?)
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        match tokio::time::timeout(self.policy.tx_timeout, self.pool.begin()).await {
            Ok(tx) => Ok(tx?),
            Err(_) => Err(StaffingError::TransactionFailure(
                "timed out waiting for a database connection".into(),
            )),
        }
    }

    async fn assign_steps(
        &self,
        conn: &mut SqliteConnection,
        employee_id: i64,
        project_id: i64,
        is_manager: bool,
    ) -> Result<Assignment> {
        let now = shared::util::now_millis();
        let link = match staffing::insert_link(conn, employee_id, project_id, is_manager, now).await
        {
            Ok(link) => link,
            Err(RepoError::Duplicate(_)) => {
                return Err(StaffingError::DuplicateAssignment {
                    employee_id,
                    project_id,
                });
            }
            Err(err) => return Err(err.into()),
        };

        let pricing = staffing::find_pricing(conn, employee_id, project_id)
            .await?
            .ok_or(StaffingError::NotFound)?;
        let pay_rate =
            RateRegion::of(&pricing.nation).select(pricing.pay_rate_sg, pricing.pay_rate_vn);

        let new_cost = project::adjust_cost(conn, project_id, from_cents(pay_rate)).await?;
        self.policy.negative_cost.check(new_cost)?;

        Ok(Assignment { link, new_cost })
    }

    async fn unassign_steps(
        &self,
        conn: &mut SqliteConnection,
        employee_id: i64,
        project_id: i64,
    ) -> Result<Decimal> {
        project::lock(conn, project_id)
            .await?
            .ok_or(StaffingError::NotFound)?;

        let pricing = staffing::find_pricing(conn, employee_id, project_id)
            .await?
            .ok_or(StaffingError::NotFound)?;
        let pay_rate =
            RateRegion::of(&pricing.nation).select(pricing.pay_rate_sg, pricing.pay_rate_vn);

        let new_cost = project::adjust_cost(conn, project_id, -from_cents(pay_rate)).await?;
        self.policy.negative_cost.check(new_cost)?;

        if !staffing::delete_link(conn, employee_id, project_id).await? {
            return Err(StaffingError::NotFound);
        }
        Ok(new_cost)
    }

    async fn change_nation_steps(
        &self,
        conn: &mut SqliteConnection,
        project_id: i64,
        nation: &str,
    ) -> Result<Project> {
        let old_nation = project::lock(conn, project_id)
            .await?
            .ok_or(StaffingError::NotFound)?;

        let totals = staffing::rate_totals(&mut *conn, project_id).await?;
        let old_sum = RateRegion::of(&old_nation).select(totals.sum_sg, totals.sum_vn);
        let new_sum = RateRegion::of(nation).select(totals.sum_sg, totals.sum_vn);
        let delta = from_cents(new_sum - old_sum);

        project::set_nation(conn, project_id, nation).await?;
        if !delta.is_zero() {
            let new_cost = project::adjust_cost(conn, project_id, delta).await?;
            if delta < Decimal::ZERO {
                self.policy.negative_cost.check(new_cost)?;
            }
        }

        project::find_by_id(&mut *conn, project_id)
            .await?
            .ok_or(StaffingError::NotFound)
    }
}

async fn audit_steps(conn: &mut SqliteConnection, project_id: i64) -> Result<CostAudit> {
    let project = project::find_by_id(&mut *conn, project_id)
        .await?
        .ok_or(StaffingError::NotFound)?;
    let totals = staffing::rate_totals(&mut *conn, project_id).await?;

    let staffed_cost = from_cents(RateRegion::of(&project.nation).select(totals.sum_sg, totals.sum_vn));
    Ok(CostAudit {
        project_id,
        drift: project.cost - staffed_cost,
        recorded_cost: project.cost,
        staffed_cost,
        nation: project.nation,
        staff_count: totals.staff_count,
    })
}

async fn staff_steps(
    conn: &mut SqliteConnection,
    project_id: i64,
) -> Result<Vec<ProjectStaffMember>> {
    let project = project::find_by_id(&mut *conn, project_id)
        .await?
        .ok_or(StaffingError::NotFound)?;
    let region = RateRegion::of(&project.nation);

    let rows = staffing::list_staff(&mut *conn, project_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| ProjectStaffMember {
            employee_id: row.employee_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role_id: row.role_id,
            role_name: row.role_name,
            is_manager: row.is_manager,
            pay_rate: from_cents(region.select(row.pay_rate_sg, row.pay_rate_vn)),
            assigned_at: row.assigned_at,
        })
        .collect())
}

/// Commit on success, roll back on error or timeout
async fn finish<T>(
    tx: Transaction<'static, Sqlite>,
    outcome: std::result::Result<Result<T>, Elapsed>,
    op: &'static str,
) -> Result<T> {
    let result = outcome.unwrap_or_else(|_| {
        Err(StaffingError::TransactionFailure(format!(
            "{op} exceeded the transaction timeout"
        )))
    });

    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(op, error = %rollback_err, "Rollback failed, connection will be discarded");
            }
            tracing::debug!(op, error = %err, "Staffing transaction rolled back");
            Err(err)
        }
    }
}
