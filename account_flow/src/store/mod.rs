//! Key-value persistence for user and session records.
//!
//! The flows only ever see the `KeyValueStore` trait: an opaque
//! `load`/`save` API over JSON values, standing in for browser-local
//! storage. Typed access to the user collection and the session record
//! lives in [`repository`].

use serde_json::Value;

pub mod errors;
pub mod file;
pub mod memory;
pub mod repository;

pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::{
    append_user, current_session, find_by_email, load_users, next_user_id, save_session,
};

/// Opaque key-value storage
pub trait KeyValueStore {
    /// Load the value stored under `key`, `None` when absent
    fn load(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &Value) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        (**self).save(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &Value) -> StoreResult<()> {
        (**self).save(key, value)
    }
}
