//! Signup transitions.

use super::state::{EmailStatus, Modal, SignupField, SignupInput, SignupState};
use crate::auth::{AuthorityLevel, FlowResult, PasswordHasher, UserRecord};
use crate::config::FlowConfig;
use crate::store::{KeyValueStore, append_user, load_users, next_user_id};
use crate::validation::{PasswordPolicy, is_email, validate};

/// Something the user did on the signup screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupEvent {
    SelectAuthority(AuthorityLevel),
    Input(SignupInput, String),
    CheckDuplicateEmail,
    OpenModal(Modal),
    CloseModal,
    /// Address picker returned a value
    AddressSelected(String),
    /// Card-entry dialog returned a value
    CardNumberSelected(String),
    TogglePasswordVisibility,
    Submit,
}

/// Why a submission was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupRejection {
    /// Duplicate check not run since the last email edit
    Unconfirmed,
    /// Duplicate check found the email already registered
    DuplicateEmail,
    /// Fields that failed validation
    Invalid(Vec<SignupField>),
}

/// Result of one signup transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupTransition {
    /// State changed, nothing else to report
    Updated,
    EmailChecked(EmailStatus),
    Rejected(SignupRejection),
    /// Record appended to the store
    Registered(UserRecord),
}

/// Signup screen state machine
///
/// Owns the form state and the store; every user action goes through
/// [`SignupFlow::dispatch`].
pub struct SignupFlow<S> {
    store: S,
    hasher: PasswordHasher,
    config: FlowConfig,
    state: SignupState,
}

impl<S: KeyValueStore> SignupFlow<S> {
    /// Create a signup flow over `store`
    ///
    /// # Errors
    ///
    /// * `FlowError::InvalidHashParams` - `config.hash_cost` is unusable
    pub fn new(store: S, config: FlowConfig) -> FlowResult<Self> {
        Ok(Self {
            store,
            hasher: PasswordHasher::new(config.hash_cost)?,
            config,
            state: SignupState::new(),
        })
    }

    pub fn state(&self) -> &SignupState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply one event and report what happened
    ///
    /// Validation problems are reported through the returned transition and
    /// the state's flags; `Err` means the store or the hasher failed.
    pub fn dispatch(&mut self, event: SignupEvent) -> FlowResult<SignupTransition> {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("signup event: {:?}", redacted(&event));
        }

        match event {
            SignupEvent::SelectAuthority(authority) => {
                self.touch();
                self.state.form.authority = authority;
            }
            SignupEvent::Input(input, value) => self.input(input, value),
            SignupEvent::CheckDuplicateEmail => {
                return self.check_duplicate_email().map(SignupTransition::EmailChecked);
            }
            SignupEvent::OpenModal(modal) => self.state.modal = Some(modal),
            SignupEvent::CloseModal => self.state.modal = None,
            SignupEvent::AddressSelected(address) => {
                self.touch();
                self.state.form.address = address;
                self.state.modal = None;
            }
            SignupEvent::CardNumberSelected(number) => {
                self.touch();
                self.state.form.credit_card_num = number;
                self.state.modal = None;
            }
            SignupEvent::TogglePasswordVisibility => {
                self.state.password_masked = !self.state.password_masked;
            }
            SignupEvent::Submit => return self.submit(),
        }

        Ok(SignupTransition::Updated)
    }

    /// Any edit clears every error flag and leaves the registered phase
    fn touch(&mut self) {
        self.state.errors.reset();
        self.state.registered = None;
    }

    fn input(&mut self, input: SignupInput, value: String) {
        self.touch();

        match input {
            SignupInput::Email => {
                self.state.email_checked = false;
                self.state.email_status = EmailStatus::Default;
            }
            SignupInput::Pw => self.state.password_policy = PasswordPolicy::evaluate(&value),
            SignupInput::PwCheck => {
                self.state.password_check_error = value != self.state.form.pw;
            }
            _ => {}
        }

        *self.state.form.input_mut(input) = value;
    }

    fn check_duplicate_email(&mut self) -> FlowResult<EmailStatus> {
        let state = &mut self.state;
        state.email_checked = true;

        let status = if !is_email(&state.form.email) {
            EmailStatus::InvalidType
        } else {
            match load_users(&self.store, &self.config.users_key)? {
                Some(users) if users.iter().any(|user| user.email == state.form.email) => {
                    EmailStatus::ConfirmedFailure
                }
                _ => EmailStatus::ConfirmedSuccess,
            }
        };

        state
            .errors
            .set(SignupField::Email, status != EmailStatus::ConfirmedSuccess);
        state.email_status = status;

        log::debug!("duplicate check for {}: {status:?}", state.form.email);
        Ok(status)
    }

    fn submit(&mut self) -> FlowResult<SignupTransition> {
        let state = &mut self.state;

        if !state.email_checked {
            state.errors.set(SignupField::Email, true);
            state.email_status = EmailStatus::Unconfirmed;
            return Ok(SignupTransition::Rejected(SignupRejection::Unconfirmed));
        }

        if state.email_status == EmailStatus::ConfirmedFailure {
            state.errors.set(SignupField::Email, true);
            return Ok(SignupTransition::Rejected(SignupRejection::DuplicateEmail));
        }

        if let Err(fields) = validate(&state.form, &mut state.errors, self.config.validation_mode)
        {
            log::debug!("signup rejected, invalid fields: {fields:?}");
            return Ok(SignupTransition::Rejected(SignupRejection::Invalid(fields)));
        }

        let id = next_user_id(&self.store, &self.config.users_key, self.config.first_user_id)?;
        let pw_hash = self.hasher.hash(&state.form.pw)?;
        let record = state.form.to_record(id, pw_hash);
        append_user(&mut self.store, &self.config.users_key, record.clone())?;

        log::info!(
            "registered {} user {} as id {id}",
            record.authority,
            record.email
        );

        state.form.pw.clear();
        state.form.pw_check.clear();
        state.password_policy = PasswordPolicy::default();
        state.password_check_error = false;
        state.email_checked = false;
        state.registered = Some(id);
        state.modal = Some(Modal::Success);

        Ok(SignupTransition::Registered(record))
    }
}

/// Event with password values blanked, for logging
fn redacted(event: &SignupEvent) -> SignupEvent {
    match event {
        SignupEvent::Input(input @ (SignupInput::Pw | SignupInput::PwCheck), _) => {
            SignupEvent::Input(*input, "***".to_string())
        }
        other => other.clone(),
    }
}
