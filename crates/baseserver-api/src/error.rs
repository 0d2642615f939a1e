//! Error types for the resource API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! Store failures never leak detail to the client: the cause is logged
//! server-side and the response body is a fixed message. A failed save on
//! create answers 400 plain text; every other store failure answers 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use baseserver_db::DbError;

use crate::validation::ValidationError;

/// Body text for every store failure.
pub const STORE_ERROR_MESSAGE: &str = "something went wrong";

/// Body text when a new record cannot be saved.
pub const SAVE_ERROR_MESSAGE: &str = "unable to save to database";

/// Errors that can occur while handling a resource request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record matches the requested identifier.
    #[error("base record {0} not found")]
    NotFound(String),

    /// The record store failed.
    #[error("store error: {0}")]
    Store(#[from] DbError),

    /// The store rejected or failed to persist a new record.
    #[error("save failed: {0}")]
    SaveFailed(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => {
                tracing::warn!(error = %e, "Rejected request body");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            Self::NotFound(_) => json_error(StatusCode::NOT_FOUND, &self.to_string()),
            Self::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, STORE_ERROR_MESSAGE)
            }
            Self::SaveFailed(e) => {
                tracing::error!(error = %e, "Saving new record failed");
                (StatusCode::BAD_REQUEST, SAVE_ERROR_MESSAGE).into_response()
            }
        }
    }
}

fn json_error(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({
        "error": message,
        "status": status.as_u16(),
    });

    (status, axum::Json(body)).into_response()
}
