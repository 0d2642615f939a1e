//! Shared application state for the resource API.
//!
//! [`AppState`] is the explicit server context: it is built once at startup,
//! wrapped in [`Arc`], and injected into handlers via Axum's `State`
//! extractor. There is no global connection state.

use std::sync::Arc;

use baseserver_db::BaseStore;

/// Shared state for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// The record store every handler reads from and writes to.
    pub store: Arc<dyn BaseStore>,
}

impl AppState {
    /// Create application state over `store`.
    pub fn new(store: Arc<dyn BaseStore>) -> Self {
        Self { store }
    }
}
