//! Signup flow.
//!
//! The signup screen collects authority level, email, password and its
//! confirmation, name, address, card number and date of birth. Submission is
//! gated twice:
//! - the duplicate-email check must have run since the email was last edited
//! - every field must pass validation (first failure only, unless the flow is
//!   configured for a full report)
//!
//! On success the record is appended to the user collection with a hashed
//! password and the success dialog opens.
//!
//! ## Example
//!
//! ```
//! use account_flow::{
//!     FlowConfig,
//!     signup::{SignupEvent, SignupFlow, SignupInput, SignupRejection, SignupTransition},
//!     store::MemoryStore,
//! };
//!
//! let mut flow = SignupFlow::new(MemoryStore::new(), FlowConfig::development()).unwrap();
//! flow.dispatch(SignupEvent::Input(SignupInput::Email, "kim@school.kr".to_string()))
//!     .unwrap();
//!
//! // Submitting before the duplicate check is turned away.
//! assert_eq!(
//!     flow.dispatch(SignupEvent::Submit).unwrap(),
//!     SignupTransition::Rejected(SignupRejection::Unconfirmed)
//! );
//! ```

pub mod machine;
pub mod state;

pub use machine::{SignupEvent, SignupFlow, SignupRejection, SignupTransition};
pub use state::{
    EmailStatus, Modal, SignupField, SignupForm, SignupInput, SignupPhase, SignupState,
};
