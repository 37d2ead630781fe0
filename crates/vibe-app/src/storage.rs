//! Persistent key-value storage backing the mock session
//!
//! A tiny string-to-string store. [`FileStore`] keeps every key in one JSON
//! object file; [`MemoryStore`] is for tests and ephemeral runs.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use vibe_core::prelude::*;

/// Name of the JSON file inside the data directory
pub const STORAGE_FILENAME: &str = "storage.json";

/// String key-value persistence
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-file store; every write rewrites the whole object atomically
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `<dir>/storage.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(STORAGE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Read-modify-write under an exclusive lock on a sidecar lock file
    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::storage(format!("No parent directory for {:?}", self.path)))?;
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::storage(format!("Failed to create {:?}: {}", dir, e)))?;

        let lock = self.lock_file(dir)?;
        FileExt::lock_exclusive(&lock)
            .map_err(|e| Error::storage(format!("Failed to lock storage: {}", e)))?;

        let result = (|| -> Result<()> {
            let mut entries = match self.read_all() {
                Ok(entries) => entries,
                Err(Error::Json(e)) => {
                    warn!("Discarding unreadable {:?}: {}", self.path, e);
                    BTreeMap::new()
                }
                Err(e) => return Err(e),
            };
            f(&mut entries);

            let temp_path = self.path.with_extension("json.tmp");
            std::fs::write(&temp_path, serde_json::to_string_pretty(&entries)?)
                .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
            std::fs::rename(&temp_path, &self.path)
                .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;
            Ok(())
        })();

        if let Err(e) = FileExt::unlock(&lock) {
            warn!("Failed to unlock storage: {}", e);
        }
        result
    }

    fn lock_file(&self, dir: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(dir.join(".storage.lock"))
            .map_err(|e| Error::storage(format!("Failed to open lock file: {}", e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })?;
        debug!("Stored key {:?} in {:?}", key, self.path);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })?;
        debug!("Removed key {:?} from {:?}", key, self.path);
        Ok(())
    }
}
