//! REST endpoint handlers for base records.
//!
//! Each handler validates its input, issues a single store call, and maps
//! the outcome to a response. Failures are returned as [`ApiError`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/base` | List all records |
//! | `POST` | `/base` | Create a record |
//! | `GET` | `/base/{id}` | Get a single record |
//! | `PUT` | `/base/{id}` | Partially update a record |
//! | `DELETE` | `/base/{id}` | Delete a record |
//! | `GET` | `/health` | Store connectivity check |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use baseserver_types::{BaseId, BaseRecord};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, ValidationError};

// ---------------------------------------------------------------------------
// GET /base -- list records
// ---------------------------------------------------------------------------

/// List every record in insertion order.
pub async fn list_bases(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BaseRecord>>, ApiError> {
    let records = state.store.list().await?;
    tracing::debug!(count = records.len(), "Listed base records");
    Ok(Json(records))
}

// ---------------------------------------------------------------------------
// GET /base/{id} -- single record
// ---------------------------------------------------------------------------

/// Return a single record, or 404 if the id is unknown or malformed.
pub async fn get_base(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<BaseRecord>, ApiError> {
    let id = parse_id(&id_str)?;

    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id_str))
}

// ---------------------------------------------------------------------------
// POST /base -- create
// ---------------------------------------------------------------------------

/// Create a record from `{name, comment}`. Responds 201 with the record, or
/// 400 `unable to save to database` if the store cannot persist it.
pub async fn create_base(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BaseRecord>), ApiError> {
    let Json(body) = body.map_err(malformed)?;
    let new = validation::validate_new_base(&body)?;

    let record = state.store.insert(new).await.map_err(ApiError::SaveFailed)?;
    tracing::info!(id = %record.id, "Created base record");

    Ok((StatusCode::CREATED, Json(record)))
}

// ---------------------------------------------------------------------------
// PUT /base/{id} -- partial update
// ---------------------------------------------------------------------------

/// Apply the `name` and/or `comment` present in the body. Responds 204.
pub async fn update_base(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body.map_err(malformed)?;
    let patch = validation::stage_patch(&body)?;
    let id = parse_id(&id_str)?;

    let staged_name = patch.name.is_some();
    let staged_comment = patch.comment.is_some();

    match state.store.update(id, patch).await? {
        Some(_) => {
            tracing::info!(%id, staged_name, staged_comment, "Updated base record");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::NotFound(id_str)),
    }
}

// ---------------------------------------------------------------------------
// DELETE /base/{id} -- delete
// ---------------------------------------------------------------------------

/// Delete a record. Responds 204 whether or not it existed.
pub async fn delete_base(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    // A malformed id cannot name a stored record, so there is nothing to delete.
    let Ok(id) = id_str.parse::<BaseId>() else {
        tracing::debug!(id = %id_str, "Delete of malformed id ignored");
        return Ok(StatusCode::NO_CONTENT);
    };

    let removed = state.store.delete(id).await?;
    tracing::info!(%id, removed, "Deleted base record");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// GET /health -- store connectivity
// ---------------------------------------------------------------------------

/// Report whether the store is reachable.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "unavailable" })),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_id(s: &str) -> Result<BaseId, ApiError> {
    s.parse::<BaseId>().map_err(|e| {
        tracing::debug!(id = %s, error = %e, "Malformed record id");
        ApiError::NotFound(s.to_owned())
    })
}

fn malformed(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(ValidationError::MalformedBody(rejection.body_text()))
}
