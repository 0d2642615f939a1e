//! Base record service binary.
//!
//! Wires configuration, the record store, and the HTTP server together and
//! runs until Ctrl-C or `SIGTERM`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize structured logging (tracing)
//! 3. Connect the store (and run migrations for `PostgreSQL`)
//! 4. Bind the listener and serve
//!
//! # Shutdown Sequence
//!
//! 1. Stop accepting connections and drain in-flight requests
//! 2. Close the store connection

mod config;
mod error;
mod startup;

use std::sync::Arc;

use baseserver_api::{AppState, RunningServer, shutdown_signal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig, ServiceConfig};
use crate::error::AppError;
use crate::startup::OpenedStore;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the store cannot be
/// reached, or the listener cannot bind.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration.
    let config = ServiceConfig::from_env()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("baseserver starting");
    info!(
        host = %config.server.host,
        port = config.server.port,
        store = ?config.store,
        db_max_connections = config.db_max_connections,
        "Configuration loaded"
    );

    // 3. Connect the store.
    let opened = OpenedStore::open(&config).await?;
    let state = Arc::new(AppState::new(Arc::clone(&opened.store)));

    // 4. Serve until a shutdown signal arrives.
    let server = match RunningServer::start(&config.server, state).await {
        Ok(server) => server,
        Err(e) => {
            opened.close().await;
            return Err(e.into());
        }
    };

    shutdown_signal().await;

    let served = server.close().await;
    opened.close().await;
    served?;

    info!("Shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match config.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
