//! Shared type definitions for the base record service.
//!
//! This crate is the single source of truth for the data model used by the
//! store (`baseserver-db`) and the HTTP layer (`baseserver-api`).
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for record identifiers
//! - [`record`] -- The base record and its create/update inputs

pub mod ids;
pub mod record;

// Re-export all public types at crate root for convenience.
pub use ids::BaseId;
pub use record::{BasePatch, BaseRecord, NewBase};
