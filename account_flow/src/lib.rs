//! # Account Flow
//!
//! Signup and login flows for a class-community app, modelled as explicit
//! state machines over an opaque key-value store.
//!
//! Each screen owns a state object (field values, per-field error flags and
//! screen-level status) and changes only through a `dispatch(event)`
//! transition. Validation problems never surface as `Err`: they are flags
//! and statuses on the state, plus a transition value describing what
//! happened. `Err` is reserved for storage and hashing faults.
//!
//! ## Core Modules
//!
//! - [`signup`]: signup form, duplicate-email check, gated submission
//! - [`login`]: login form, credential lookup, session record
//! - [`validation`]: field predicates, password policy, aggregate validators
//! - [`store`]: the `KeyValueStore` trait, in-memory and JSON-file stores
//! - [`auth`]: user/session records, password hashing, errors
//!
//! ## Example
//!
//! ```
//! use account_flow::{
//!     FlowConfig,
//!     login::{LoginEvent, LoginField, LoginFlow, LoginTransition},
//!     store::MemoryStore,
//! };
//!
//! let mut login = LoginFlow::new(MemoryStore::new(), FlowConfig::development()).unwrap();
//! login
//!     .dispatch(LoginEvent::Input(LoginField::Email, "kim@school.kr".to_string()))
//!     .unwrap();
//! login
//!     .dispatch(LoginEvent::Input(LoginField::Pw, "abcd123!".to_string()))
//!     .unwrap();
//!
//! assert_eq!(login.dispatch(LoginEvent::Submit).unwrap(), LoginTransition::UnknownUser);
//! assert!(login.state().unknown_user);
//! ```

/// User and session records, password hashing and flow errors.
pub mod auth;
pub use auth::{AuthorityLevel, FlowError, FlowResult, SessionRecord, UserId, UserRecord};

pub mod config;
pub use config::{FlowConfig, ValidationMode};

pub mod constants;

/// Login screen state machine.
pub mod login;

/// Signup screen state machine.
pub mod signup;

/// Key-value persistence.
pub mod store;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};

/// Field predicates and aggregate validation.
pub mod validation;
