//! Account records, password hashing and flow errors.
//!
//! This module holds the pieces shared by the signup and login flows:
//! - `UserRecord` / `SessionRecord` as they are persisted
//! - Argon2id password hashing (low work factor, illustrative)
//! - `FlowError` for the faults a transition can hit
//!
//! ## Example
//!
//! ```
//! use account_flow::auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(1).unwrap();
//! let hash = hasher.hash("secret12!").unwrap();
//! assert!(hasher.verify("secret12!", &hash));
//! ```

pub mod errors;
pub mod models;
pub mod password;

pub use errors::{FlowError, FlowResult};
pub use models::{AuthorityLevel, SessionRecord, UserId, UserRecord};
pub use password::PasswordHasher;
