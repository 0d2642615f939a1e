//! Input validation at the service boundary.
//!
//! Request bodies arrive as loosely-typed JSON. This module turns them into
//! the typed [`NewBase`] / [`BasePatch`] inputs the store accepts, independent
//! of whatever constraints the storage engine itself enforces.

use baseserver_types::{BasePatch, NewBase};
use serde_json::{Map, Value};

/// Fields that must be present when creating a record, checked in order.
pub const REQUIRED_FIELDS: [&str; 2] = ["name", "comment"];

/// Reasons a request body is rejected. All map to `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent (or `null`).
    #[error("Missing {0} in request body")]
    MissingField(&'static str),

    /// A field is present but not a non-empty string.
    #[error("Invalid {0} in request body")]
    InvalidField(&'static str),

    /// The body is valid JSON but not an object.
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// The body could not be read as JSON at all.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Validate a creation body.
///
/// Fails on the first entry of [`REQUIRED_FIELDS`] that is missing, so a
/// body lacking both fields reports `name`.
pub fn validate_new_base(body: &Value) -> Result<NewBase, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::NotAnObject)?;

    for field in REQUIRED_FIELDS {
        if object.get(field).is_none_or(Value::is_null) {
            return Err(ValidationError::MissingField(field));
        }
    }

    Ok(NewBase {
        name: text_field(object, "name")?,
        comment: text_field(object, "comment")?,
    })
}

/// Stage a partial update from an update body.
///
/// Only keys present in the body are staged. Unknown keys (including `id`)
/// are ignored.
pub fn stage_patch(body: &Value) -> Result<BasePatch, ValidationError> {
    let object = body.as_object().ok_or(ValidationError::NotAnObject)?;

    Ok(BasePatch {
        name: staged_field(object, "name")?,
        comment: staged_field(object, "comment")?,
    })
}

fn staged_field(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    if object.contains_key(field) {
        text_field(object, field).map(Some)
    } else {
        Ok(None)
    }
}

fn text_field(object: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match object.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ValidationError::InvalidField(field)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_complete_body() {
        let new = validate_new_base(&json!({"name": "Ada", "comment": "hello"})).unwrap();
        assert_eq!(new.name, "Ada");
        assert_eq!(new.comment, "hello");
    }

    #[test]
    fn missing_comment_is_named() {
        let err = validate_new_base(&json!({"name": "Ada"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("comment"));
        assert_eq!(err.to_string(), "Missing comment in request body");
    }

    #[test]
    fn missing_both_reports_first_required_field() {
        let err = validate_new_base(&json!({})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn null_counts_as_missing() {
        let err = validate_new_base(&json!({"name": null, "comment": "x"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn empty_or_non_string_fields_are_invalid() {
        let new = validate_new_base(&json!({"name": " ", "comment": "x"})).unwrap();
        assert_eq!(new.name, " ");

        let err = validate_new_base(&json!({"name": "", "comment": "x"})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidField("name"));

        let err = validate_new_base(&json!({"name": "Ada", "comment": 42})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidField("comment"));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert_eq!(
            validate_new_base(&json!(["name", "comment"])).unwrap_err(),
            ValidationError::NotAnObject
        );
        assert_eq!(stage_patch(&json!("name")).unwrap_err(), ValidationError::NotAnObject);
    }

    #[test]
    fn patch_stages_only_present_keys() {
        let patch = stage_patch(&json!({"comment": "updated"})).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.comment.as_deref(), Some("updated"));
    }

    #[test]
    fn patch_ignores_id_and_unknown_keys() {
        let patch = stage_patch(&json!({"id": "abc", "colour": "red"})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_accepts_whitespace_but_not_empty_text() {
        let patch = stage_patch(&json!({"comment": "  "})).unwrap();
        assert_eq!(patch.comment.as_deref(), Some("  "));

        let err = stage_patch(&json!({"comment": ""})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidField("comment"));
    }

    #[test]
    fn patch_cannot_clear_a_field() {
        let err = stage_patch(&json!({"name": null})).unwrap_err();
        assert_eq!(err, ValidationError::InvalidField("name"));
    }
}
