//! Password hashing with Argon2id.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use super::errors::{FlowError, FlowResult};
use crate::constants::DEFAULT_HASH_MEMORY_KIB;

/// One-way password hasher
///
/// The work factor is kept low on purpose; this hash only keeps plaintext
/// out of the store.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the given Argon2 time cost
    ///
    /// # Errors
    ///
    /// * `FlowError::InvalidHashParams` - Argon2 rejected the parameters
    pub fn new(time_cost: u32) -> FlowResult<Self> {
        let params = Params::new(DEFAULT_HASH_MEMORY_KIB, time_cost, 1, None)
            .map_err(|e| FlowError::InvalidHashParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password into a PHC string
    pub fn hash(&self, password: &str) -> FlowResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        Ok(self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| FlowError::HashingFailed)?
            .to_string())
    }

    /// Check a candidate password against a stored hash
    ///
    /// A malformed stored hash never matches.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            log::debug!("stored password hash is not a PHC string");
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
