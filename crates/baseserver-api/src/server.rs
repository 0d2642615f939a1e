//! HTTP server lifecycle management.
//!
//! [`RunningServer::start`] binds the listener and serves the router on a
//! background task; [`RunningServer::close`] stops accepting connections,
//! waits for in-flight requests to finish, and reports how the server
//! exited. The store itself is owned by the caller and closed after the
//! server has stopped.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on. `0` picks a free port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
        }
    }
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Handle to a server running on a background task.
#[derive(Debug)]
pub struct RunningServer {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl RunningServer {
    /// Bind to the configured address and start serving.
    ///
    /// Binding happens before this returns, so a port conflict is reported
    /// here rather than from the background task.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address is invalid or the
    /// listener cannot bind.
    pub async fn start(config: &ServerConfig, state: Arc<AppState>) -> Result<Self, ServerError> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| ServerError::Bind(format!("no local address: {e}")))?;

        let router = build_router(state);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    // A dropped sender also stops the server.
                    let _ = shutdown_rx.await;
                })
                .await
                .map_err(|e| ServerError::Serve(e.to_string()))
        });

        info!(%local_addr, "Server listening");

        Ok(Self {
            local_addr,
            shutdown_tx,
            handle,
        })
    }

    /// The address the listener is bound to.
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for in-flight requests to drain.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Serve`] if the server failed while running or
    /// its task panicked.
    pub async fn close(self) -> Result<(), ServerError> {
        info!(local_addr = %self.local_addr, "Closing server");
        // Err means the server task already exited; its result is below.
        let _ = self.shutdown_tx.send(());

        self.handle
            .await
            .map_err(|e| ServerError::Serve(format!("server task failed: {e}")))??;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolve when the process receives Ctrl-C or `SIGTERM`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received");
}
