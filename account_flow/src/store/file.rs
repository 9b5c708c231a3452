//! Directory-backed JSON store.
//!
//! Each key is kept in its own `<key>.json` file, so the data survives
//! across runs the way browser-local storage survives a reload.

use serde_json::Value;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{
    KeyValueStore,
    errors::{StoreError, StoreResult},
};
use crate::config::FlowConfig;

/// JSON file store rooted at a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        log::debug!("opened JSON store at {}", root.display());
        Ok(Self { root })
    }

    /// Open the store at `config.storage_dir`
    pub fn from_config(config: &FlowConfig) -> StoreResult<Self> {
        Self::open(&config.storage_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        let path = self.path_for(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::corrupt(key, e))
    }

    fn save(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let raw = serde_json::to_string_pretty(value).map_err(|e| StoreError::corrupt(key, e))?;

        // Replace atomically via a sibling temp file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }
}
