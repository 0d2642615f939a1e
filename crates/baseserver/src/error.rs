//! Error types for the service binary.
//!
//! [`AppError`] is the top-level error type that wraps all possible
//! failure modes during startup and shutdown.

/// Top-level error for the service binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Connecting to or migrating the store failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: baseserver_db::DbError,
    },

    /// The HTTP server failed to start or exited with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: baseserver_api::ServerError,
    },
}
