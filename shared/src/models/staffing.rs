//! Staffing Model (employee ↔ project links)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One employee staffed on one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffingLink {
    pub employee_id: i64,
    pub project_id: i64,
    pub is_manager: bool,
    pub assigned_at: i64,
}

/// Assign payload
///
/// Ids are optional at the wire level so that a missing id is reported as a
/// missing field instead of a generic body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignEmployee {
    pub employee_id: Option<i64>,
    pub project_id: Option<i64>,
    #[serde(default)]
    pub is_manager: Option<bool>,
}

/// Unassign payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnassignEmployee {
    pub employee_id: Option<i64>,
    pub project_id: Option<i64>,
}

/// Result of a successful assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub link: StaffingLink,
    pub new_cost: Decimal,
}

/// Result of a successful unassignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unassignment {
    pub message: String,
    pub employee_id: i64,
    pub project_id: i64,
    pub new_cost: Decimal,
}

/// Staff member as listed on a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStaffMember {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: i64,
    pub role_name: String,
    pub is_manager: bool,
    /// Rate effective under the project's current nation
    pub pay_rate: Decimal,
    pub assigned_at: i64,
}
