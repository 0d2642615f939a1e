//! Store acquisition and release.
//!
//! [`OpenedStore::open`] connects the backend selected by configuration;
//! [`OpenedStore::close`] releases it after the server has stopped.

use std::sync::Arc;

use baseserver_db::{BaseStore, MemoryBaseStore, PgBaseStore, PostgresConfig, PostgresPool};
use tracing::{info, warn};

use crate::config::{ServiceConfig, StoreBackend};
use crate::error::AppError;

/// A connected store plus the pool that must be closed on shutdown.
pub struct OpenedStore {
    /// The store handed to the HTTP layer.
    pub store: Arc<dyn BaseStore>,
    pool: Option<PostgresPool>,
}

impl OpenedStore {
    /// Connect the configured backend. For `PostgreSQL` this also runs the
    /// embedded migrations.
    pub async fn open(config: &ServiceConfig) -> Result<Self, AppError> {
        match config.store {
            StoreBackend::Postgres => {
                let pg_config = PostgresConfig::new(&config.database_url)
                    .with_max_connections(config.db_max_connections);
                let pool = PostgresPool::connect(&pg_config).await?;

                if let Err(e) = pool.run_migrations().await {
                    pool.close().await;
                    return Err(e.into());
                }

                let store = Arc::new(PgBaseStore::new(pool.pool().clone()));
                Ok(Self {
                    store,
                    pool: Some(pool),
                })
            }
            StoreBackend::Memory => {
                warn!("Using in-memory store; records are lost on exit");
                Ok(Self {
                    store: Arc::new(MemoryBaseStore::new()),
                    pool: None,
                })
            }
        }
    }

    /// Release the store connection.
    pub async fn close(self) {
        if let Some(pool) = self.pool {
            pool.close().await;
        }
        info!("Store closed");
    }
}
