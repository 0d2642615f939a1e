//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Record identifiers are assigned by the store at creation time. The
//! `PostgreSQL` store generates them with `gen_random_uuid()`; the in-memory
//! store uses [`BaseId::new`] (UUID v7, time-ordered).

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a base record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BaseId(pub Uuid);

impl BaseId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for BaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for BaseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>().map(Self)
    }
}

impl From<Uuid> for BaseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<BaseId> for Uuid {
    fn from(id: BaseId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = BaseId::new();
        let b = BaseId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn parses_display_output() {
        let id = BaseId::new();
        let parsed: BaseId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_non_uuid_strings() {
        assert!("not-an-id".parse::<BaseId>().is_err());
        assert!("5c0a1f2e9d3b".parse::<BaseId>().is_err());
    }

    #[test]
    fn serializes_as_bare_uuid_string() {
        let id = BaseId::from(Uuid::nil());
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::json!("00000000-0000-0000-0000-000000000000"));
    }
}
