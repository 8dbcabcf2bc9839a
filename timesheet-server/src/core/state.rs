//! Server State

use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::staffing::StaffingService;

/// State shared by every request handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub staffing: StaffingService,
}

impl ServerState {
    /// Open the configured database and build the services on top of it
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(config).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// Build state over an already opened database
    pub fn new(config: Config, db: DbService) -> Self {
        let staffing = StaffingService::new(db.pool.clone(), config.staffing_policy());
        tracing::debug!(
            negative_cost = %config.negative_cost_policy,
            tx_timeout_ms = config.staffing_tx_timeout_ms,
            "Staffing service ready"
        );
        Self {
            config,
            pool: db.pool,
            staffing,
        }
    }
}
