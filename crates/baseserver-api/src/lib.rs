//! Resource API server for base records.
//!
//! This crate provides an Axum HTTP server that maps the five CRUD verbs on
//! `/base` onto a [`BaseStore`](baseserver_db::BaseStore):
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/base` | 200, array of records |
//! | `GET` | `/base/{id}` | 200, record (404 if absent) |
//! | `POST` | `/base` | 201, created record |
//! | `PUT` | `/base/{id}` | 204 (404 if absent) |
//! | `DELETE` | `/base/{id}` | 204 |
//!
//! # Architecture
//!
//! Handlers receive an explicit [`AppState`] holding the store. Request
//! bodies are validated in [`validation`] before any store call; every
//! failure is an [`ApiError`](error::ApiError) that knows its own status
//! code. Store failures are logged and answered with an opaque 500, except a
//! failed save on create, which answers 400 `unable to save to database`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod validation;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{RunningServer, ServerConfig, ServerError, shutdown_signal};
pub use state::AppState;
pub use validation::ValidationError;
