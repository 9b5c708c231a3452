//! Field validation.
//!
//! - [`rules`]: one total predicate per kind of field, plus the password
//!   policy shared by live feedback and submission
//! - [`form`]: the `Form` trait, per-field error flags and the aggregate
//!   validators (first-failure and full-report)

pub mod form;
pub mod rules;

pub use form::{FieldErrors, Form, validate, validate_all, validate_first_failure};
pub use rules::{
    PasswordPolicy, is_authority_selected, is_credit_card_num, is_date_of_birth, is_email,
    is_name, is_not_empty, is_password, is_password_confirmed,
};
