//! File-backed store.
//!
//! The file is a single JSON object mapping each key to the JSON text of
//! its value, the same shape browser storage exposes. Every batch rewrites
//! the whole file through a temp file and rename, so a crash mid-write
//! leaves the previous contents intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use im::OrdMap;

use super::memory::stage;
use super::{Store, StoreError, WriteBatch};

/// A `Store` persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: OrdMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            if contents.trim().is_empty() {
                OrdMap::new()
            } else {
                serde_json::from_str(&contents).map_err(|source| StoreError::BadFile {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            OrdMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened session store");
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &OrdMap<String, String>) -> Result<(), StoreError> {
        let io_error = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(io_error)?;

        let contents = serde_json::to_vec_pretty(entries).map_err(|source| StoreError::BadFile {
            path: self.path.clone(),
            source,
        })?;

        let mut temp = tempfile::NamedTempFile::new_in(&dir).map_err(io_error)?;
        temp.write_all(&contents).map_err(io_error)?;
        temp.as_file().sync_all().map_err(io_error)?;
        temp.persist(&self.path).map_err(|e| io_error(e.error))?;

        tracing::debug!(path = %self.path.display(), keys = entries.len(), "persisted session store");
        Ok(())
    }
}

impl Store for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn apply(&mut self, batch: WriteBatch) -> Result<(), StoreError> {
        if batch.is_empty() {
            return Ok(());
        }
        let staged = stage(&self.entries, batch);
        self.persist(&staged)?;
        self.entries = staged;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        let empty = OrdMap::new();
        self.persist(&empty)?;
        self.entries = empty;
        Ok(())
    }
}
