//! Typed access to the user collection and the session record.

use serde::{Serialize, de::DeserializeOwned};

use super::{
    KeyValueStore,
    errors::{StoreError, StoreResult},
};
use crate::auth::{SessionRecord, UserId, UserRecord};

fn load_typed<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> StoreResult<Option<T>> {
    store
        .load(key)?
        .map(|value| serde_json::from_value(value).map_err(|e| StoreError::corrupt(key, e)))
        .transpose()
}

fn save_typed<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> StoreResult<()> {
    let value = serde_json::to_value(value).map_err(|e| StoreError::corrupt(key, e))?;
    store.save(key, &value)
}

/// Load the user collection, `None` if nobody has signed up yet
pub fn load_users(store: &impl KeyValueStore, key: &str) -> StoreResult<Option<Vec<UserRecord>>> {
    load_typed(store, key)
}

/// Find the stored user with exactly this email
pub fn find_by_email(
    store: &impl KeyValueStore,
    key: &str,
    email: &str,
) -> StoreResult<Option<UserRecord>> {
    Ok(load_users(store, key)?
        .unwrap_or_default()
        .into_iter()
        .find(|user| user.email == email))
}

/// Id for the next user: one past the largest stored id, or `first_id`
pub fn next_user_id(store: &impl KeyValueStore, key: &str, first_id: UserId) -> StoreResult<UserId> {
    let next = load_users(store, key)?
        .unwrap_or_default()
        .iter()
        .map(|user| user.id)
        .max()
        .map_or(first_id, |last| last.saturating_add(1).max(first_id));
    Ok(next)
}

/// Append `user` to the collection, creating it if absent
pub fn append_user(store: &mut impl KeyValueStore, key: &str, user: UserRecord) -> StoreResult<()> {
    let mut users = load_users(store, key)?.unwrap_or_default();
    users.push(user);
    save_typed(store, key, &users)
}

/// Persist the session record
pub fn save_session(
    store: &mut impl KeyValueStore,
    key: &str,
    session: &SessionRecord,
) -> StoreResult<()> {
    save_typed(store, key, session)
}

/// Load the session record, if someone is logged in
pub fn current_session(store: &impl KeyValueStore, key: &str) -> StoreResult<Option<SessionRecord>> {
    load_typed(store, key)
}
