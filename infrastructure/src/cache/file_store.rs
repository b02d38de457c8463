//! JSON file key-value store.
//!
//! The whole store is one JSON object (`{"key": "value", ...}`) rewritten on
//! every change. Writes go to a sibling temp file first and are renamed into
//! place, so a crash mid-write leaves the previous contents intact.

use fairfinder_application::{CacheError, KeyValueStore};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(io_error(&self.path, e)),
        }
    }

    /// Entries to modify before a write.
    ///
    /// An unparsable file is replaced rather than blocking every later write.
    /// The flag is true when the file has to be rewritten for that reason.
    fn entries_for_write(&self) -> Result<(Entries, bool), CacheError> {
        match self.read_entries() {
            Ok(entries) => Ok((entries, false)),
            Err(CacheError::Serialization(e)) => {
                warn!("Discarding unreadable cache file {}: {}", self.path.display(), e);
                Ok((Entries::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let raw = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e))?;

        debug!("Wrote {} cache entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>, CacheError> {
        self.lock.lock().map_err(|e| CacheError::Io(e.to_string()))
    }
}

fn io_error(path: &Path, e: std::io::Error) -> CacheError {
    CacheError::Io(format!("{}: {}", path.display(), e))
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let _guard = self.guard()?;
        Ok(self.read_entries()?.remove(key))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let _guard = self.guard()?;
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        let _guard = self.guard()?;
        let (mut entries, recovered) = self.entries_for_write()?;
        if entries.remove(key).is_some() || recovered {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
