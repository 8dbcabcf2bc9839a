use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::RepoError;

/// Staffing operation errors
///
/// Every variant means the transaction was rolled back.
#[derive(Debug, Error)]
pub enum StaffingError {
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Pricing join found no row: unknown employee, project or role
    #[error("Project or Employee not found")]
    NotFound,

    #[error("Employee {employee_id} is already staffed on project {project_id}")]
    DuplicateAssignment { employee_id: i64, project_id: i64 },

    /// Rejected by `NegativeCostPolicy::Reject`
    #[error("Project cost would become negative: {0}")]
    NegativeCost(Decimal),

    #[error("Staffing transaction failed: {0}")]
    TransactionFailure(String),
}

impl From<RepoError> for StaffingError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => StaffingError::NotFound,
            other => StaffingError::TransactionFailure(other.to_string()),
        }
    }
}

impl From<sqlx::Error> for StaffingError {
    fn from(err: sqlx::Error) -> Self {
        StaffingError::TransactionFailure(err.to_string())
    }
}

impl From<StaffingError> for AppError {
    fn from(err: StaffingError) -> Self {
        match err {
            StaffingError::MissingField(field) => AppError::required_field(field),
            StaffingError::NotFound => AppError::new(ErrorCode::StaffingTargetNotFound),
            StaffingError::DuplicateAssignment {
                employee_id,
                project_id,
            } => AppError::new(ErrorCode::AlreadyStaffed)
                .with_detail("employee_id", employee_id)
                .with_detail("project_id", project_id),
            StaffingError::NegativeCost(cost) => AppError::new(ErrorCode::ProjectCostNegative)
                .with_detail("new_cost", cost.to_string()),
            StaffingError::TransactionFailure(detail) => {
                // Store detail stays in the log
                tracing::error!(target: "staffing", error = %detail, "Staffing transaction failed");
                AppError::new(ErrorCode::TransactionFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (StaffingError::MissingField("employee_id"), StatusCode::BAD_REQUEST),
            (StaffingError::NotFound, StatusCode::NOT_FOUND),
            (
                StaffingError::DuplicateAssignment {
                    employee_id: 1,
                    project_id: 2,
                },
                StatusCode::CONFLICT,
            ),
            (
                StaffingError::NegativeCost(Decimal::new(-500, 2)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                StaffingError::TransactionFailure("disk I/O error".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).http_status(), status);
        }
    }

    #[test]
    fn test_transaction_failure_hides_store_detail() {
        let err = AppError::from(StaffingError::TransactionFailure(
            "UNIQUE constraint failed: secret_table.col".into(),
        ));
        assert_eq!(err.code, ErrorCode::TransactionFailed);
        assert!(!err.message.contains("secret_table"));
        assert!(err.details.is_none());
    }

    #[test]
    fn test_missing_field_names_field() {
        let err = AppError::from(StaffingError::MissingField("project_id"));
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "project_id is required");
    }

    #[test]
    fn test_repo_not_found_maps_to_not_found() {
        let err = StaffingError::from(RepoError::NotFound("FOREIGN KEY constraint failed".into()));
        assert!(matches!(err, StaffingError::NotFound));

        let err = StaffingError::from(RepoError::Database("locked".into()));
        assert!(matches!(err, StaffingError::TransactionFailure(_)));
    }
}
