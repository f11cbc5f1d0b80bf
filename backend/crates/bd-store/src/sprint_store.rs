use crate::{
    Clock, IdGenerator, StoreError, StoreResult, SystemClock, UuidIdGenerator,
};

use bd_core::{SprintPatch, SprintRecord, SprintSubmission};

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

/// Keyed in-memory store of sprint records
///
/// Every operation takes the lock exactly once, so writes to the same id
/// are serialized and the last writer wins.
#[derive(Clone)]
pub struct SprintStore {
    inner: Arc<RwLock<StoreInner>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

#[derive(Default)]
struct StoreInner {
    records: HashMap<String, SprintRecord>,
    /// Ids in insertion order
    order: Vec<String>,
}

impl SprintStore {
    /// Store with UUID ids and the system clock
    pub fn new() -> Self {
        Self::with_parts(Arc::new(UuidIdGenerator), Arc::new(SystemClock))
    }

    pub fn with_parts(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner::default())),
            ids,
            clock,
        }
    }

    /// Store a new record built from a validated submission
    pub async fn create(&self, submission: SprintSubmission) -> StoreResult<SprintRecord> {
        let id = self.ids.next_id();
        let mut inner = self.inner.write().await;

        if inner.records.contains_key(&id) {
            return Err(StoreError::duplicate_id(id));
        }

        let record = SprintRecord::new(id.clone(), submission, self.clock.now());
        inner.order.push(id.clone());
        inner.records.insert(id, record.clone());

        debug!("Stored sprint {} ({} records)", record.id, inner.records.len());
        Ok(record)
    }

    pub async fn get(&self, id: &str) -> StoreResult<SprintRecord> {
        let inner = self.inner.read().await;
        inner
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// All records in insertion order
    pub async fn list(&self) -> Vec<SprintRecord> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    /// Merge `patch` into an existing record. Never creates a record.
    pub async fn update(&self, id: &str, patch: &SprintPatch) -> StoreResult<SprintRecord> {
        let mut inner = self.inner.write().await;

        let existing = inner
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let merged = existing.merged(patch, self.clock.now())?;
        *existing = merged.clone();

        debug!("Updated sprint {}", id);
        Ok(merged)
    }

    /// Returns true if a record existed and was removed
    pub async fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;

        if inner.records.remove(id).is_none() {
            return false;
        }
        inner.order.retain(|existing| existing != id);

        debug!("Deleted sprint {}", id);
        true
    }

    /// Remove every record, returning how many were dropped
    pub async fn clear(&self) -> usize {
        let mut inner = self.inner.write().await;
        let removed = inner.records.len();
        inner.records.clear();
        inner.order.clear();
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for SprintStore {
    fn default() -> Self {
        Self::new()
    }
}
