//! Login form state.

use crate::validation::{FieldErrors, Form, is_email, is_not_empty};

/// Login fields, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Pw,
}

impl LoginField {
    /// Message shown under the field while it is flagged
    pub fn error_message(self) -> &'static str {
        match self {
            LoginField::Email => "Please check your email",
            LoginField::Pw => "Please enter your password",
        }
    }
}

/// Current login values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub pw: String,
}

impl Form for LoginForm {
    type Field = LoginField;

    const FIELDS: &'static [LoginField] = &[LoginField::Email, LoginField::Pw];

    fn is_field_valid(&self, field: LoginField) -> bool {
        match field {
            LoginField::Email => is_email(&self.email),
            LoginField::Pw => is_not_empty(&self.pw),
        }
    }
}

/// Everything the login screen renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginState {
    pub form: LoginForm,
    pub errors: FieldErrors<LoginField>,
    /// Last submission matched no stored account
    pub unknown_user: bool,
    pub password_masked: bool,
}

impl LoginState {
    /// Empty form, no flags, password input masked
    pub fn new() -> Self {
        Self {
            form: LoginForm::default(),
            errors: FieldErrors::new(),
            unknown_user: false,
            password_masked: true,
        }
    }

    pub fn field_message(&self, field: LoginField) -> Option<&'static str> {
        self.errors.get(field).then(|| field.error_message())
    }

    /// Banner shown after an unknown-user submission
    pub fn unknown_user_message(&self) -> Option<&'static str> {
        self.unknown_user
            .then_some("No account matches this email and password")
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}
