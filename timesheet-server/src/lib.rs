//! Timesheet Server
//!
//! Project staffing and cost accrual over SQLite.
//!
//! ```text
//! timesheet-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── db/            # pool, migrations, money, repositories
//! ├── staffing/      # assign / unassign / re-pricing service
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod staffing;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use staffing::{StaffingError, StaffingService};
pub use utils::init_logger;
