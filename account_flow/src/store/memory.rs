//! In-memory key-value store.

use serde_json::Value;
use std::collections::HashMap;

use super::{KeyValueStore, errors::StoreResult};

/// `HashMap`-backed store, the stand-in for a fresh browser profile
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }
}
