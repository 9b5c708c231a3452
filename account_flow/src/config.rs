//! Flow configuration module.
//!
//! Provides the settings shared by the signup and login flows: storage keys,
//! id assignment, hashing cost and validation mode.

use std::{env, path::PathBuf, str::FromStr};

use crate::constants::{
    DEFAULT_HASH_COST, FIRST_USER_ID, HOME_PATH, LOGGEDIN_USER, USER_STORAGE,
};

/// How a form reports invalid fields on submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Flag only the first invalid field in declaration order
    #[default]
    FirstFailure,
    /// Flag every invalid field at once
    FullReport,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-failure" | "first_failure" => Ok(Self::FirstFailure),
            "full-report" | "full_report" => Ok(Self::FullReport),
            other => Err(format!("{other:?} is not a valid validation mode")),
        }
    }
}

/// Flow configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    /// Storage key of the user collection
    pub users_key: String,

    /// Storage key of the session record
    pub session_key: String,

    /// Destination reported after a successful login
    pub home_path: String,

    /// Id assigned to the first user of an empty store
    pub first_user_id: u64,

    /// Argon2 time cost used when hashing new passwords
    pub hash_cost: u32,

    /// Validation mode used on submission
    pub validation_mode: ValidationMode,

    /// Directory backing `JsonFileStore`
    pub storage_dir: PathBuf,
}

impl FlowConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `ACCOUNT_USERS_KEY`: user collection key (default: `users`)
    /// - `ACCOUNT_SESSION_KEY`: session record key (default: `loggedInUser`)
    /// - `ACCOUNT_HOME_PATH`: redirect after login (default: `/`)
    /// - `ACCOUNT_FIRST_USER_ID`: first assigned id (default: 1)
    /// - `ACCOUNT_HASH_COST`: Argon2 time cost (default: 1)
    /// - `ACCOUNT_VALIDATION_MODE`: `first-failure` or `full-report`
    /// - `ACCOUNT_STORAGE_DIR`: file store directory (default: `.account_flow`)
    ///
    /// Unset or unparsable variables fall back to the development defaults.
    pub fn from_env() -> Self {
        let defaults = Self::development();
        Self {
            users_key: env::var("ACCOUNT_USERS_KEY").unwrap_or(defaults.users_key),
            session_key: env::var("ACCOUNT_SESSION_KEY").unwrap_or(defaults.session_key),
            home_path: env::var("ACCOUNT_HOME_PATH").unwrap_or(defaults.home_path),
            first_user_id: parse_var("ACCOUNT_FIRST_USER_ID").unwrap_or(defaults.first_user_id),
            hash_cost: parse_var::<u32>("ACCOUNT_HASH_COST")
                .filter(|cost| *cost > 0)
                .unwrap_or(defaults.hash_cost),
            validation_mode: parse_var("ACCOUNT_VALIDATION_MODE")
                .unwrap_or(defaults.validation_mode),
            storage_dir: env::var("ACCOUNT_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
        }
    }

    /// Create a default configuration for development
    pub fn development() -> Self {
        Self {
            users_key: USER_STORAGE.to_string(),
            session_key: LOGGEDIN_USER.to_string(),
            home_path: HOME_PATH.to_string(),
            first_user_id: FIRST_USER_ID,
            hash_cost: DEFAULT_HASH_COST,
            validation_mode: ValidationMode::FirstFailure,
            storage_dir: PathBuf::from(".account_flow"),
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::development()
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring unparsable {name}={raw:?}");
            None
        }
    }
}
