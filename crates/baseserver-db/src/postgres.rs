//! Connection pool for the `base_data` table.
//!
//! The service binary opens one [`PostgresPool`] at startup from
//! `DATABASE_URL` and `DB_MAX_CONNECTIONS`, applies the embedded migration
//! that creates `base_data`, and hands the inner [`PgPool`] to
//! [`PgBaseStore`](crate::PgBaseStore). The pool is closed once, after the
//! HTTP server has drained.
//!
//! A request waits at most [`DEFAULT_ACQUIRE_TIMEOUT_SECS`] for a free
//! connection; past that the store call fails and the handler answers with
//! a store error instead of hanging.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::error::DbError;

/// Pool size used when `DB_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Seconds a store call waits for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Seconds an unused connection is kept open.
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 300;

/// Pool settings for the record database.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database URL, e.g. `postgresql://localhost/baseServerDb`.
    pub url: String,
    /// Upper bound on concurrently open connections.
    pub max_connections: u32,
    /// How long a store call waits for a connection before failing.
    pub acquire_timeout: Duration,
    /// Idle connection lifetime.
    pub idle_timeout: Duration,
}

impl PostgresConfig {
    /// Settings for `url` with the default pool size and timeouts.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }

    /// Set the pool size (`DB_MAX_CONNECTIONS`).
    #[must_use]
    pub const fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set how long a store call waits for a connection.
    #[must_use]
    pub const fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Open pool against the record database.
#[derive(Clone)]
pub struct PostgresPool {
    pool: PgPool,
}

impl PostgresPool {
    /// Open the pool and verify one connection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if `config.url` is not a `PostgreSQL`
    /// URL, or [`DbError::Postgres`] if the database cannot be reached.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DbError> {
        let connect_options: PgConnectOptions = config
            .url
            .parse()
            .map_err(|e: sqlx::Error| DbError::Config(format!("Invalid database URL: {e}")))?;

        let host = connect_options.get_host().to_owned();
        let database = connect_options.get_database().unwrap_or("").to_owned();

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(config.idle_timeout)
            .connect_with(connect_options)
            .await?;

        tracing::info!(
            %host,
            %database,
            max_connections = config.max_connections,
            "Connected to record database"
        );

        Ok(Self { pool })
    }

    /// Open a pool for `url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection fails.
    pub async fn connect_url(url: &str) -> Result<Self, DbError> {
        Self::connect(&PostgresConfig::new(url)).await
    }

    /// Create the `base_data` table and its ordering index if missing.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Migration`] if the migration fails.
    pub async fn run_migrations(&self) -> Result<(), DbError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("base_data migrations applied");
        Ok(())
    }

    /// The pool handed to [`PgBaseStore`](crate::PgBaseStore).
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections to return, then close them all.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Record database pool closed");
    }
}
