//! Project staffing and cost accrual
//!
//! Assigning an employee to a project adds their role's pay rate for the
//! project's nation to the project cost; unassigning subtracts it. The link
//! and the cost change commit together or not at all.

mod error;
mod policy;
pub mod pricing;
mod service;


pub use error::StaffingError;
pub use policy::{NegativeCostPolicy, StaffingPolicy};
pub use pricing::RateRegion;
pub use service::StaffingService;
