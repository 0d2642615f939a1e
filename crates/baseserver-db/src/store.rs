//! The [`BaseStore`] abstraction over record persistence.
//!
//! The resource service talks to the store exclusively through this trait so
//! that the `PostgreSQL` backend ([`PgBaseStore`](crate::PgBaseStore)) and
//! the in-memory backend ([`MemoryBaseStore`](crate::MemoryBaseStore)) are
//! interchangeable behind an `Arc<dyn BaseStore>`.
//!
//! Absence is always explicit: lookups and updates return `Option`, and
//! deletes report whether a record was removed.

use async_trait::async_trait;
use baseserver_types::{BaseId, BasePatch, BaseRecord, NewBase};

use crate::error::DbError;

/// Persistent collection of base records.
#[async_trait]
pub trait BaseStore: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<BaseRecord>, DbError>;

    /// The record with `id`, or `None` if no record matches.
    async fn get(&self, id: BaseId) -> Result<Option<BaseRecord>, DbError>;

    /// Persist a new record. The store assigns its identifier.
    async fn insert(&self, new: NewBase) -> Result<BaseRecord, DbError>;

    /// Apply the staged fields of `patch` to the record with `id`.
    ///
    /// Returns the updated record, or `None` if no record matches. An empty
    /// patch leaves the record untouched.
    async fn update(&self, id: BaseId, patch: BasePatch) -> Result<Option<BaseRecord>, DbError>;

    /// Remove the record with `id`. Returns `true` if a record was removed.
    async fn delete(&self, id: BaseId) -> Result<bool, DbError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
