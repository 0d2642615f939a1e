//! Axum router construction for the resource API.
//!
//! Assembles all routes into a single [`Router`] with request tracing and
//! CORS middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /base` -- list records
/// - `POST /base` -- create a record
/// - `GET /base/{id}` -- single record
/// - `PUT /base/{id}` -- partial update
/// - `DELETE /base/{id}` -- delete
/// - `GET /health` -- store connectivity
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/base",
            get(handlers::list_bases).post(handlers::create_base),
        )
        .route(
            "/base/{id}",
            get(handlers::get_base)
                .put(handlers::update_base)
                .delete(handlers::delete_base),
        )
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
