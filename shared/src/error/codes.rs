//! Unified error codes for the timesheet service
//!
//! This module defines all error codes returned by the HTTP API and consumed
//! by the front end. Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Project errors
//! - 3xxx: Staffing errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,

    // ==================== 2xxx: Project ====================
    /// Project not found
    ProjectNotFound = 2001,
    /// Project name is empty
    ProjectNameRequired = 2002,
    /// Cost can only change through staffing operations
    ProjectCostReadOnly = 2003,
    /// Operation would leave the project cost below zero
    ProjectCostNegative = 2004,
    /// Money amount has more than two decimal places
    InvalidMoneyAmount = 2005,

    // ==================== 3xxx: Staffing ====================
    /// Employee is already staffed on the project
    AlreadyStaffed = 3001,
    /// Employee, project or role behind a staffing link was not found
    StaffingTargetNotFound = 3002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Staffing transaction rolled back
    TransactionFailed = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",

            // Project
            ErrorCode::ProjectNotFound => "Project not found",
            ErrorCode::ProjectNameRequired => "Project name is required",
            ErrorCode::ProjectCostReadOnly => {
                "Project cost is managed by staffing and cannot be set directly"
            }
            ErrorCode::ProjectCostNegative => "Project cost cannot become negative",
            ErrorCode::InvalidMoneyAmount => "Money amounts allow at most two decimal places",

            // Staffing
            ErrorCode::AlreadyStaffed => "Employee is already assigned to this project",
            ErrorCode::StaffingTargetNotFound => "Project or Employee not found",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TransactionFailed => "Transaction failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),

            // Project
            2001 => Ok(ErrorCode::ProjectNotFound),
            2002 => Ok(ErrorCode::ProjectNameRequired),
            2003 => Ok(ErrorCode::ProjectCostReadOnly),
            2004 => Ok(ErrorCode::ProjectCostNegative),
            2005 => Ok(ErrorCode::InvalidMoneyAmount),

            // Staffing
            3001 => Ok(ErrorCode::AlreadyStaffed),
            3002 => Ok(ErrorCode::StaffingTargetNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9006 => Ok(ErrorCode::TransactionFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
