//! In-process store.

use im::OrdMap;

use super::{Store, StoreError, WriteBatch, WriteOp};

/// A `Store` that lives in memory only.
///
/// Backed by a persistent map, so `snapshot()` is O(1) and batches are
/// staged on a cheap clone before being swapped in.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: OrdMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw JSON value, bypassing batching.
    ///
    /// Useful for importing data written by another client.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Immutable view of every entry at this moment.
    #[must_use]
    pub fn snapshot(&self) -> OrdMap<String, String> {
        self.entries.clone()
    }
}

/// Apply `batch` onto a copy of `entries`.
pub(super) fn stage(entries: &OrdMap<String, String>, batch: WriteBatch) -> OrdMap<String, String> {
    let mut staged = entries.clone();
    for op in batch.into_ops() {
        match op {
            WriteOp::Put { key, value } => {
                staged.insert(key, value);
            }
            WriteOp::Remove { key } => {
                staged.remove(&key);
            }
        }
    }
    staged
}

impl Store for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn apply(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        self.entries = stage(&self.entries, batch);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries = OrdMap::new();
        Ok(())
    }
}
