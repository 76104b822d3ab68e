//! File-Backed Store
//!
//! Persists the whole key/value map as a single JSON object. Every mutation
//! rewrites the file through a temp file and an atomic rename.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StorageError;

use super::{KeyValueStore, StorageResult};

// == File Store ==
/// Persistent key/value store kept in a JSON file.
#[derive(Debug)]
pub struct FileStore {
    /// Location of the JSON file
    path: PathBuf,
    /// In-memory copy of the file contents
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing contents.
    ///
    /// A missing file starts an empty store; the file is created on the first
    /// write. A file that is not a JSON object of strings is rejected.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();

        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).map_err(|e| {
                StorageError::Unavailable(format!(
                    "store file '{}' is not a JSON string map: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No store file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Opened store {} with {} keys", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sibling file the next write goes to before the rename, named after the
    /// full file name so `cache.json` and `cache.db` never collide.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn persist(&self) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StorageError::Unavailable(format!("serialize store: {e}")))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        let previous = self.entries.insert(key.to_string(), value);

        if let Err(e) = self.persist() {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.persist() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}
