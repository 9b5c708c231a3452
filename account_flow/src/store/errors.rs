//! Storage error types.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stored value is not valid JSON or has the wrong shape
    #[error("Corrupt value under key {key:?}: {reason}")]
    Corrupt { key: String, reason: String },

    /// Key cannot be mapped onto the backing medium
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    pub(crate) fn corrupt(key: &str, err: serde_json::Error) -> Self {
        StoreError::Corrupt {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
