//! Result cache port.
//!
//! The last successful batch is kept in a key-value store under a fixed key.
//! [`KeyValueStore`] is the storage contract implemented by infrastructure;
//! [`ResultCache`] layers the batch (de)serialization on top of it.

use fairfinder_domain::ExhibitionBatch;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

/// Key under which the last batch is stored
pub const RESULTS_KEY: &str = "exhibitionResults";

/// Errors raised by cache storage
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    fn put(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// Typed access to the single "last results" slot
#[derive(Clone)]
pub struct ResultCache {
    store: Arc<dyn KeyValueStore>,
}

impl ResultCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the cached batch, if any.
    ///
    /// A slot that does not parse as a batch is an error; callers decide
    /// whether to ignore it.
    pub fn load(&self) -> Result<Option<ExhibitionBatch>, CacheError> {
        match self.store.get(RESULTS_KEY)? {
            Some(raw) => {
                let batch: ExhibitionBatch = serde_json::from_str(&raw)?;
                debug!("Loaded {} cached exhibitions", batch.len());
                Ok(Some(batch))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the slot with `batch`
    pub fn store(&self, batch: &ExhibitionBatch) -> Result<(), CacheError> {
        let raw = serde_json::to_string(batch)?;
        self.store.put(RESULTS_KEY, &raw)
    }

    pub fn clear(&self) -> Result<(), CacheError> {
        self.store.remove(RESULTS_KEY)
    }
}

/// In-process store for tests and for running with the cache disabled
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Io(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Io(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Io(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
