//! Project Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Project entity
///
/// `cost` is the accrued staffing cost. It only moves through staffing
/// operations; the opening balance is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// "Singapore" selects the Singapore pay rate, anything else the Vietnam rate
    pub nation: String,
    pub cost: Decimal,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create project payload
///
/// Missing `name` or `nation` is reported by the handler, not by the JSON
/// extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
    /// Starting balance of the cost ledger (defaults to zero)
    #[serde(default)]
    pub opening_cost: Option<Decimal>,
}

/// Update project payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Accepted only so a direct cost write can be refused explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<serde_json::Value>,
}

/// Change-of-nation payload (re-prices the accrued cost)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NationChange {
    pub nation: String,
}

/// Stored cost compared against the sum of current staff pay rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAudit {
    pub project_id: i64,
    pub nation: String,
    pub recorded_cost: Decimal,
    pub staffed_cost: Decimal,
    /// `recorded_cost - staffed_cost`: opening balance plus outside adjustments
    pub drift: Decimal,
    pub staff_count: i64,
}
