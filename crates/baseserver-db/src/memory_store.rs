//! In-process [`BaseStore`] backed by a `Vec` behind a [`RwLock`].
//!
//! Used by the HTTP test-suite and selectable at runtime with
//! `BASE_STORE=memory`. Records are kept in insertion order. Contents are
//! lost when the process exits.
//!
//! The `testing` feature exposes `MemoryBaseStore::set_failing` for
//! store-failure tests; it is never enabled in the service binary.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use baseserver_types::{BaseId, BasePatch, BaseRecord, NewBase};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::store::BaseStore;

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MemoryBaseStore {
    records: RwLock<Vec<BaseRecord>>,
    failing: AtomicBool,
}

impl MemoryBaseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with [`DbError::Unavailable`]
    /// (or succeed again with `false`). Simulates a lost database
    /// connection.
    #[cfg(any(test, feature = "testing"))]
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of live records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), DbError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable(String::from(
                "in-memory store is set to fail",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BaseStore for MemoryBaseStore {
    async fn list(&self) -> Result<Vec<BaseRecord>, DbError> {
        self.check_available()?;
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: BaseId) -> Result<Option<BaseRecord>, DbError> {
        self.check_available()?;
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn insert(&self, new: NewBase) -> Result<BaseRecord, DbError> {
        self.check_available()?;
        let record = new.into_record(BaseId::new());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: BaseId, patch: BasePatch) -> Result<Option<BaseRecord>, DbError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        patch.apply_to(record);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: BaseId) -> Result<bool, DbError> {
        self.check_available()?;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.check_available()
    }
}
