//! Repository Module
//!
//! Plain SQL access for projects and staffing links. Functions that issue a
//! single statement take any executor (pool or transaction); functions that
//! must run inside the caller's transaction take `&mut SqliteConnection`.

pub mod project;
pub mod staffing;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::money::MoneyError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{1}")]
    Business(ErrorCode, String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return RepoError::Duplicate(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return RepoError::NotFound(db_err.message().to_string());
            }
        }
        RepoError::Database(err.to_string())
    }
}

impl From<MoneyError> for RepoError {
    fn from(err: MoneyError) -> Self {
        RepoError::Business(ErrorCode::InvalidMoneyAmount, err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Business(code, msg) => AppError::with_message(code, msg),
            RepoError::Database(msg) => {
                tracing::error!(target: "database", error = %msg, "Repository error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
