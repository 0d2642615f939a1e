//! The base record entity and its creation/update inputs.
//!
//! A base record is a named comment with a store-assigned identifier.
//! [`NewBase`] and [`BasePatch`] are the already-validated shapes that the
//! resource service hands to the store; they never carry an identifier, so
//! an update cannot touch `id`.

use serde::{Deserialize, Serialize};

use crate::ids::BaseId;

/// A persisted base record.
///
/// Serialized as `{"id": ..., "name": ..., "comment": ...}` both in
/// response bodies and in the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRecord {
    /// Store-assigned identifier. Immutable after creation.
    pub id: BaseId,
    /// Non-empty display name.
    pub name: String,
    /// Non-empty comment text.
    pub comment: String,
}

/// Input for creating a record. Both fields are required and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBase {
    /// Name of the new record.
    pub name: String,
    /// Comment of the new record.
    pub comment: String,
}

impl NewBase {
    /// Build the persisted record once the store has assigned `id`.
    pub fn into_record(self, id: BaseId) -> BaseRecord {
        BaseRecord {
            id,
            name: self.name,
            comment: self.comment,
        }
    }
}

/// A staged partial update.
///
/// `None` means "leave the stored value untouched", never "clear it".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePatch {
    /// Replacement name, if staged.
    pub name: Option<String>,
    /// Replacement comment, if staged.
    pub comment: Option<String>,
}

impl BasePatch {
    /// Whether no field is staged.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.comment.is_none()
    }

    /// Apply the staged fields to `record` in place.
    pub fn apply_to(&self, record: &mut BaseRecord) {
        if let Some(name) = &self.name {
            record.name.clone_from(name);
        }
        if let Some(comment) = &self.comment {
            record.comment.clone_from(comment);
        }
    }
}
