//! Record store for the base record service.
//!
//! The resource service persists base records through the [`BaseStore`]
//! trait. Two backends implement it:
//!
//! ```text
//! Resource Service
//!     |
//!     +-- Arc<dyn BaseStore>
//!         |-- PgBaseStore      (PostgreSQL, table `base_data`)
//!         +-- MemoryBaseStore  (in-process, tests and demos)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- The [`BaseStore`] trait
//! - [`base_store`] -- `PostgreSQL` implementation
//! - [`memory_store`] -- In-memory implementation
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`error`] -- Shared error types

pub mod base_store;
pub mod error;
pub mod memory_store;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use base_store::{BaseRow, PgBaseStore};
pub use error::DbError;
pub use memory_store::MemoryBaseStore;
pub use postgres::{PostgresConfig, PostgresPool};
pub use store::BaseStore;
