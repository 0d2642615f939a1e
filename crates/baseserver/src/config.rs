//! Configuration types for the service binary.
//!
//! All configuration is loaded from environment variables (a `.env` file in
//! the working directory is honoured). Every variable has a default, so the
//! service starts with no configuration at all against a local database.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `postgresql://localhost/baseServerDb` |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `5000` |
//! | `BASE_STORE` | `postgres` (or `memory`) |
//! | `DB_MAX_CONNECTIONS` | `10` |
//! | `LOG_LEVEL` | `info` (ignored when `RUST_LOG` is set) |
//! | `LOG_FORMAT` | `pretty` (or `json`) |

use std::path::PathBuf;

use baseserver_api::ServerConfig;
use baseserver_db::postgres::DEFAULT_MAX_CONNECTIONS;

/// Default store URL.
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/baseServerDb";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid {var}: {message}")]
    Invalid {
        /// Name of the offending environment variable.
        var: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// A `.env` file exists but could not be read or parsed.
    #[error("failed to load .env: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Which [`BaseStore`](baseserver_db::BaseStore) backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// `PostgreSQL` at `DATABASE_URL`.
    Postgres,
    /// Process-local store; contents are lost on exit.
    Memory,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Store connection URL.
    pub database_url: String,
    /// Store backend selection.
    pub store: StoreBackend,
    /// Maximum pooled database connections.
    pub db_max_connections: u32,
    /// Listener settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        env_file_loaded(dotenvy::dotenv())?;
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        let store = match lookup("BASE_STORE").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "BASE_STORE",
                    message: format!("expected `postgres` or `memory`, got `{other}`"),
                });
            }
        };

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                message: String::from("must be at least 1"),
            });
        }

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| String::from("0.0.0.0")),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
        };

        let format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    message: format!("expected `pretty` or `json`, got `{other}`"),
                });
            }
        };

        Ok(Self {
            database_url,
            store,
            db_max_connections,
            server,
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or_else(|| String::from("info")),
                format,
            },
        })
    }
}

/// Accept a missing `.env` file; surface any other load failure.
fn env_file_loaded(result: Result<PathBuf, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    lookup(var).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            message: e.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.store, StoreBackend::Postgres);
        assert_eq!(config.db_max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn overrides_are_applied() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgresql://db/other"),
            ("PORT", "5005"),
            ("HOST", "127.0.0.1"),
            ("BASE_STORE", "memory"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("LOG_FORMAT", "json"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgresql://db/other");
        assert_eq!(config.server.port, 5005);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.db_max_connections, 4);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn invalid_port_names_the_variable() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
        assert!(err.to_string().starts_with("invalid PORT"));
    }

    #[test]
    fn unknown_store_backend_is_rejected() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("BASE_STORE", "mongo")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "BASE_STORE", .. }));
    }

    #[test]
    fn missing_env_file_is_ignored() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(env_file_loaded(Err(missing)).is_ok());
        assert!(env_file_loaded(Ok(PathBuf::from(".env"))).is_ok());
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let malformed = dotenvy::Error::LineParse(String::from("PORT 5000"), 4);
        let err = env_file_loaded(Err(malformed)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile(_)));
        assert!(err.to_string().starts_with("failed to load .env"));

        let unreadable =
            dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(
            env_file_loaded(Err(unreadable)),
            Err(ConfigError::EnvFile(_))
        ));
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err =
            ServiceConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. }));
    }
}
