//! Login flow.
//!
//! Validates email format and a non-empty password, then looks for a stored
//! user with that email whose password hash verifies. A match is written to
//! the session key and reported as a redirect to the home path; anything
//! else raises the unknown-user banner.

pub mod machine;
pub mod state;

pub use machine::{LoginEvent, LoginFlow, LoginTransition};
pub use state::{LoginField, LoginForm, LoginState};
