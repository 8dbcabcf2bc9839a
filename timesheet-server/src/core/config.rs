use std::time::Duration;

use crate::core::ServerError;
use crate::staffing::{NegativeCostPolicy, StaffingPolicy};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | data/timesheet.db | SQLite database file |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default log level (RUST_LOG overrides) |
/// | LOG_DIR | (unset) | Write daily rolling log files here |
/// | DB_MAX_CONNECTIONS | 5 | Pool size |
/// | DB_BUSY_TIMEOUT_MS | 5000 | Wait for the SQLite write lock |
/// | REQUEST_TIMEOUT_MS | 30000 | Whole-request timeout |
/// | STAFFING_TX_TIMEOUT_MS | 5000 | Bound on one staffing transaction |
/// | STAFFING_NEGATIVE_COST | allow | `allow` or `reject` negative project cost |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub db_max_connections: u32,
    pub db_busy_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub staffing_tx_timeout_ms: u64,
    pub negative_cost_policy: NegativeCostPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "data/timesheet.db".into(),
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            db_max_connections: 5,
            db_busy_timeout_ms: 5000,
            request_timeout_ms: 30000,
            staffing_tx_timeout_ms: 5000,
            negative_cost_policy: NegativeCostPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; a malformed policy value is an error.
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();

        let negative_cost_policy = match std::env::var("STAFFING_NEGATIVE_COST") {
            Ok(raw) => raw.parse().map_err(ServerError::Config)?,
            Err(_) => defaults.negative_cost_policy,
        };

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            http_port: env_parse("HTTP_PORT", defaults.http_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            db_busy_timeout_ms: env_parse("DB_BUSY_TIMEOUT_MS", defaults.db_busy_timeout_ms),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", defaults.request_timeout_ms),
            staffing_tx_timeout_ms: env_parse(
                "STAFFING_TX_TIMEOUT_MS",
                defaults.staffing_tx_timeout_ms,
            ),
            negative_cost_policy,
        })
    }

    /// Policy handed to the staffing service
    pub fn staffing_policy(&self) -> StaffingPolicy {
        StaffingPolicy {
            negative_cost: self.negative_cost_policy,
            tx_timeout: Duration::from_millis(self.staffing_tx_timeout_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
