//! Key-value persistence backends.
//!
//! Values are opaque strings keyed by name, mirroring browser local storage.

use crate::error::{Result, StoreError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// String storage addressed by key.
pub trait TemplateStorage: Send + Sync {
    /// Read the value under `key`, or `None` if nothing was stored.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// One `{key}.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl TemplateStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), bytes = contents.len(), "loaded storage entry");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.display().to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        std::fs::write(&path, value).map_err(io_err)?;
        debug!(path = %path.display(), bytes = value.len(), "saved storage entry");
        Ok(())
    }
}

/// Process-local storage, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().expect("acquire read lock on entries");
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().expect("acquire write lock on entries");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
