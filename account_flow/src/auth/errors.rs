//! Flow error types.
//!
//! Validation failures are not errors: they surface as field flags and
//! statuses on the form state. These variants cover real faults only.

use thiserror::Error;

use crate::store::StoreError;

/// Faults raised while running a signup or login transition
#[derive(Debug, Error)]
pub enum FlowError {
    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing failed
    #[error("Password hashing failed")]
    HashingFailed,

    /// Hashing parameters rejected
    #[error("Invalid hashing parameters: {0}")]
    InvalidHashParams(String),
}

impl FlowError {
    /// Get a client-safe error message that doesn't leak sensitive information
    ///
    /// Storage errors are sanitized so file paths and payloads never reach
    /// the screen.
    pub fn client_message(&self) -> String {
        match self {
            FlowError::Store(_) => "Could not access saved accounts".to_string(),
            FlowError::InvalidHashParams(_) => "Internal error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for flow transitions
pub type FlowResult<T> = Result<T, FlowError>;
