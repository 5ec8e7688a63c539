//! Persisted key-value storage.
//!
//! A `Store` maps string keys to JSON text, like browser storage does.
//! Writes are grouped into a `WriteBatch` that the store applies all at
//! once, so a decision that touches several keys is never half recorded.
//!
//! Typed access goes through `StoreExt`, which decodes each value against
//! the schema of its `StoreKey` and reports mismatches instead of trusting
//! whatever JSON is on disk.
//!
//! ## Implementations
//!
//! - `MemoryStore`: in-process, lost on drop. Used by tests and ephemeral
//!   sessions.
//! - `FileStore`: a JSON file rewritten atomically on every batch.

pub mod error;
pub mod file;
pub mod key;
pub mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::StoreError;
pub use file::FileStore;
pub use key::{StoreKey, COUNTER_PREFIX};
pub use memory::MemoryStore;

/// A single pending write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOp {
    /// Set `key` to the given JSON text.
    Put { key: String, value: String },
    /// Delete `key`.
    Remove { key: String },
}

/// Ordered group of writes applied atomically by a `Store`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a typed value for `key`.
    pub fn put<T: Serialize + ?Sized>(&mut self, key: &StoreKey, value: &T) -> Result<(), StoreError> {
        let raw = key.as_key();
        let value = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: raw.clone(),
            source,
        })?;
        self.ops.push(WriteOp::Put { key: raw, value });
        Ok(())
    }

    /// Queue a deletion of `key`.
    pub fn remove(&mut self, key: &StoreKey) {
        self.ops.push(WriteOp::Remove { key: key.as_key() });
    }

    /// Number of queued writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the queued writes in order.
    pub fn ops(&self) -> impl Iterator<Item = &WriteOp> {
        self.ops.iter()
    }

    /// Consume the batch, yielding its writes in order.
    pub fn into_ops(self) -> impl Iterator<Item = WriteOp> {
        self.ops.into_iter()
    }
}

/// Persisted string-to-JSON mapping.
///
/// Implementations must apply a `WriteBatch` all-or-nothing: if `apply`
/// returns an error, no key in the batch may have changed.
pub trait Store {
    /// Raw JSON text stored under `key`.
    fn get_raw(&self, key: &str) -> Option<String>;

    /// All stored keys, sorted.
    fn keys(&self) -> Vec<String>;

    /// Apply every write in `batch`, or none of them.
    fn apply(&mut self, batch: WriteBatch) -> Result<(), StoreError>;

    /// Remove every key.
    fn clear(&mut self) -> Result<(), StoreError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get_raw(&self, key: &str) -> Option<String> {
        (**self).get_raw(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }

    fn apply(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        (**self).apply(batch)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Typed, validated reads on top of any `Store`.
pub trait StoreExt: Store {
    /// Decode the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent and `StoreError::Corrupt`
    /// when the stored JSON does not match the expected schema.
    fn read<T: DeserializeOwned>(&self, key: &StoreKey) -> Result<Option<T>, StoreError> {
        let raw_key = key.as_key();
        let Some(raw) = self.get_raw(&raw_key) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key: raw_key, source })
    }

    /// Decode the value under `key`, falling back to `T::default()` when absent.
    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &StoreKey) -> Result<T, StoreError> {
        Ok(self.read(key)?.unwrap_or_default())
    }

    /// Check if `key` is present.
    fn contains(&self, key: &StoreKey) -> bool {
        self.get_raw(&key.as_key()).is_some()
    }

    /// Every key that parses as a `StoreKey`, skipping foreign entries.
    fn typed_keys(&self) -> Vec<StoreKey> {
        self.keys().iter().filter_map(|k| StoreKey::parse(k)).collect()
    }
}

impl<S: Store + ?Sized> StoreExt for S {}
