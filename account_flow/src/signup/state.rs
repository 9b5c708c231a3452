//! Signup form state.

use std::fmt;

use crate::auth::{AuthorityLevel, UserId, UserRecord};
use crate::validation::{
    FieldErrors, Form, PasswordPolicy, is_authority_selected, is_credit_card_num,
    is_date_of_birth, is_email, is_name, is_not_empty, is_password, is_password_confirmed,
};

/// Signup fields, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Authority,
    Email,
    Pw,
    PwCheck,
    Name,
    Address,
    DetailAddress,
    CreditCardNum,
    DateOfBirth,
}

impl SignupField {
    /// Message shown under the field while it is flagged
    pub fn error_message(self) -> &'static str {
        match self {
            SignupField::Authority => "Please choose teacher or parent",
            SignupField::Email => "Please check your email",
            SignupField::Pw => "Please check your password",
            SignupField::PwCheck => "Passwords do not match",
            SignupField::Name => "Please check your name",
            SignupField::Address => "Please choose an address",
            SignupField::DetailAddress => "Please enter the detailed address",
            SignupField::CreditCardNum => "Please check the card number",
            SignupField::DateOfBirth => "Please enter your date of birth as 6 digits",
        }
    }
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignupField::Authority => "authority",
            SignupField::Email => "email",
            SignupField::Pw => "pw",
            SignupField::PwCheck => "pwCheck",
            SignupField::Name => "name",
            SignupField::Address => "address",
            SignupField::DetailAddress => "detailAddress",
            SignupField::CreditCardNum => "creditCardNum",
            SignupField::DateOfBirth => "dateOfBirth",
        };
        write!(f, "{name}")
    }
}

/// Signup fields typed in directly; the rest come from selectors and dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupInput {
    Email,
    Pw,
    PwCheck,
    Name,
    DetailAddress,
    DateOfBirth,
}

/// Outcome of the duplicate-email check, and why the email is flagged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmailStatus {
    #[default]
    Default,
    InvalidType,
    Unconfirmed,
    ConfirmedFailure,
    ConfirmedSuccess,
}

/// Dialogs the signup screen can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Account created
    Success,
    /// Address picker
    Address,
    /// Card-number entry
    Credit,
}

/// Where the signup screen is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupPhase {
    Editing,
    Checked(EmailStatus),
    Registered(UserId),
}

/// Current signup values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub authority: AuthorityLevel,
    pub email: String,
    pub pw: String,
    pub pw_check: String,
    pub name: String,
    pub address: String,
    pub detail_address: String,
    pub credit_card_num: String,
    pub date_of_birth: String,
}

impl SignupForm {
    /// The detail-address input is offered once an address is chosen
    pub fn detail_address_enabled(&self) -> bool {
        !self.address.is_empty()
    }

    pub(crate) fn input_mut(&mut self, input: SignupInput) -> &mut String {
        match input {
            SignupInput::Email => &mut self.email,
            SignupInput::Pw => &mut self.pw,
            SignupInput::PwCheck => &mut self.pw_check,
            SignupInput::Name => &mut self.name,
            SignupInput::DetailAddress => &mut self.detail_address,
            SignupInput::DateOfBirth => &mut self.date_of_birth,
        }
    }

    /// Build the stored record; the confirmation value is dropped
    pub(crate) fn to_record(&self, id: UserId, pw_hash: String) -> UserRecord {
        UserRecord {
            id,
            authority: self.authority,
            email: self.email.clone(),
            pw: pw_hash,
            name: self.name.clone(),
            address: self.address.clone(),
            detail_address: self.detail_address.clone(),
            credit_card_num: self.credit_card_num.clone(),
            date_of_birth: self.date_of_birth.clone(),
        }
    }
}

impl Form for SignupForm {
    type Field = SignupField;

    const FIELDS: &'static [SignupField] = &[
        SignupField::Authority,
        SignupField::Email,
        SignupField::Pw,
        SignupField::PwCheck,
        SignupField::Name,
        SignupField::Address,
        SignupField::DetailAddress,
        SignupField::CreditCardNum,
        SignupField::DateOfBirth,
    ];

    fn is_field_valid(&self, field: SignupField) -> bool {
        match field {
            SignupField::Authority => is_authority_selected(self.authority),
            SignupField::Email => is_email(&self.email),
            SignupField::Pw => is_password(&self.pw),
            SignupField::PwCheck => is_password_confirmed(&self.pw_check, &self.pw),
            SignupField::Name => is_name(&self.name),
            SignupField::Address => is_not_empty(&self.address),
            SignupField::DetailAddress => is_not_empty(&self.detail_address),
            SignupField::CreditCardNum => is_credit_card_num(&self.credit_card_num),
            SignupField::DateOfBirth => is_date_of_birth(&self.date_of_birth),
        }
    }
}

/// Everything the signup screen renders from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupState {
    pub form: SignupForm,
    pub errors: FieldErrors<SignupField>,
    pub email_status: EmailStatus,
    /// Duplicate check has run since the last email edit
    pub email_checked: bool,
    pub password_policy: PasswordPolicy,
    /// Confirmation differs from the password, updated as it is typed
    pub password_check_error: bool,
    /// Password inputs are masked
    pub password_masked: bool,
    pub modal: Option<Modal>,
    pub registered: Option<UserId>,
}

impl SignupState {
    /// Empty form, no flags, password inputs masked
    pub fn new() -> Self {
        Self {
            form: SignupForm::default(),
            errors: FieldErrors::new(),
            email_status: EmailStatus::Default,
            email_checked: false,
            password_policy: PasswordPolicy::default(),
            password_check_error: false,
            password_masked: true,
            modal: None,
            registered: None,
        }
    }

    pub fn phase(&self) -> SignupPhase {
        match (self.registered, self.email_checked) {
            (Some(id), _) => SignupPhase::Registered(id),
            (None, true) => SignupPhase::Checked(self.email_status),
            (None, false) => SignupPhase::Editing,
        }
    }

    /// Error text under the email input, if it is flagged
    pub fn email_message(&self) -> Option<&'static str> {
        if !self.errors.get(SignupField::Email) {
            return None;
        }
        Some(match self.email_status {
            EmailStatus::InvalidType => "Please enter a valid email address",
            EmailStatus::Unconfirmed => "Please check whether the email is available",
            EmailStatus::ConfirmedFailure => "This email is already registered",
            EmailStatus::Default | EmailStatus::ConfirmedSuccess => {
                SignupField::Email.error_message()
            }
        })
    }

    /// Success text under the email input after a passing check
    pub fn email_success_message(&self) -> Option<&'static str> {
        (self.email_checked && self.email_status == EmailStatus::ConfirmedSuccess)
            .then_some("This email is available")
    }

    /// Error text for any field, email included
    pub fn field_message(&self, field: SignupField) -> Option<&'static str> {
        match field {
            SignupField::Email => self.email_message(),
            SignupField::PwCheck if self.password_check_error => {
                Some(SignupField::PwCheck.error_message())
            }
            _ => self.errors.get(field).then(|| field.error_message()),
        }
    }
}

impl Default for SignupState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_first_failure;

    fn valid_form() -> SignupForm {
        SignupForm {
            authority: AuthorityLevel::Teacher,
            email: "kim@school.kr".to_string(),
            pw: "abcd123!".to_string(),
            pw_check: "abcd123!".to_string(),
            name: "김선생".to_string(),
            address: "서울시 강남구".to_string(),
            detail_address: "101호".to_string(),
            credit_card_num: "1234-5678-1234-5678".to_string(),
            date_of_birth: "850101".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let mut errors = FieldErrors::new();
        assert_eq!(validate_first_failure(&valid_form(), &mut errors), Ok(()));
    }

    #[test]
    fn test_empty_form_fails_on_authority() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            validate_first_failure(&SignupForm::default(), &mut errors),
            Err(SignupField::Authority)
        );
    }

    #[test]
    fn test_mismatched_confirmation() {
        let form = SignupForm {
            pw_check: "abcd123?".to_string(),
            ..valid_form()
        };
        let mut errors = FieldErrors::new();
        assert_eq!(
            validate_first_failure(&form, &mut errors),
            Err(SignupField::PwCheck)
        );
    }

    #[test]
    fn test_record_has_hash_and_no_confirmation() {
        let record = valid_form().to_record(3, "hashed".to_string());
        assert_eq!(record.id, 3);
        assert_eq!(record.pw, "hashed");

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("pwCheck").is_none());
    }

    #[test]
    fn test_new_state_is_masked_and_editing() {
        let state = SignupState::new();
        assert!(state.password_masked);
        assert_eq!(state.phase(), SignupPhase::Editing);
        assert!(!state.form.detail_address_enabled());
    }

    #[test]
    fn test_default_state_matches_new() {
        assert_eq!(SignupState::default(), SignupState::new());
        assert!(SignupState::default().password_masked);
    }

    #[test]
    fn test_email_message_follows_status() {
        let mut state = SignupState::new();
        state.email_status = EmailStatus::ConfirmedFailure;
        assert_eq!(state.email_message(), None);

        state.errors.set(SignupField::Email, true);
        assert_eq!(
            state.email_message(),
            Some("This email is already registered")
        );

        state.email_status = EmailStatus::Default;
        assert_eq!(state.email_message(), Some("Please check your email"));
    }

    #[test]
    fn test_field_message() {
        let mut state = SignupState::new();
        assert_eq!(state.field_message(SignupField::Name), None);

        state.errors.set(SignupField::Name, true);
        assert_eq!(
            state.field_message(SignupField::Name),
            Some("Please check your name")
        );

        state.password_check_error = true;
        assert_eq!(
            state.field_message(SignupField::PwCheck),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_field_display_uses_form_names() {
        assert_eq!(SignupField::PwCheck.to_string(), "pwCheck");
        assert_eq!(SignupField::CreditCardNum.to_string(), "creditCardNum");
    }
}
