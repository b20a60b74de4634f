//! A [`KeyValueStore`] persisted as a single JSON object on disk.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tinylink_core::store::{KeyValueStore, Result};
use tinylink_core::StorageError;
use tracing::{debug, warn};

type Slots = BTreeMap<String, String>;

/// Stores every key as a string field of one JSON object file.
///
/// A missing file reads as an empty store. Every write rewrites the whole
/// file through a temp file in the same directory that is renamed over the
/// target, creating the parent directory if needed. A file that does not
/// parse is replaced by the next write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Slots> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Slots::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::Serialization(format!("parse {}: {}", self.path.display(), e))
        })
    }

    /// Loads the slots for a read-modify-write. Returns `true` alongside
    /// them when the file was unparseable and must be rewritten.
    fn load_for_write(&self) -> Result<(Slots, bool)> {
        match self.load() {
            Ok(slots) => Ok((slots, false)),
            Err(StorageError::Serialization(e)) => {
                warn!(error = %e, "store file is corrupt, starting from an empty store");
                Ok((Slots::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, slots: &Slots) -> Result<()> {
        let parent = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent,
            None => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .map_err(|e| StorageError::Io(format!("create dir {}: {}", parent.display(), e)))?;

        let json = serde_json::to_string_pretty(slots)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| StorageError::Io(format!("create temp in {}: {}", parent.display(), e)))?;
        temp.write_all(json.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| StorageError::Io(format!("write {}: {}", temp.path().display(), e)))?;
        temp.persist(&self.path).map_err(|e| {
            StorageError::Io(format!("rename into {}: {}", self.path.display(), e.error))
        })?;

        debug!(path = %self.path.display(), keys = slots.len(), "store file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let (mut slots, _) = self.load_for_write()?;
        slots.insert(key.to_owned(), value.to_owned());
        self.save(&slots)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let (mut slots, corrupt) = self.load_for_write()?;
        let existed = slots.remove(key).is_some();
        if existed || corrupt {
            self.save(&slots)?;
        }
        Ok(existed)
    }
}
