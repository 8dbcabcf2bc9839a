//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod money;
pub mod repository;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::core::{Config, Result};

/// Database service owning the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database configured for this process
    pub async fn new(config: &Config) -> Result<Self> {
        Self::open(
            &config.database_path,
            config.db_max_connections,
            Duration::from_millis(config.db_busy_timeout_ms),
        )
        .await
    }

    /// Open (or create) a database file with WAL, foreign keys and a busy timeout
    pub async fn open(db_path: &str, max_connections: u32, busy_timeout: Duration) -> Result<Self> {
        if let Some(parent) = Path::new(db_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        tracing::info!(
            path = %db_path,
            max_connections,
            busy_timeout_ms = busy_timeout.as_millis() as u64,
            "Database connection established (SQLite WAL)"
        );

        Self::migrate(pool).await
    }

    /// Private in-memory database with the schema applied
    ///
    /// Pinned to a single connection that is never recycled: every SQLite
    /// in-memory connection is its own database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("Database migrations applied");
        Ok(Self { pool })
    }
}
