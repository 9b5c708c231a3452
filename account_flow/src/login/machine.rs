//! Login transitions.

use super::state::{LoginField, LoginState};
use crate::auth::{FlowResult, PasswordHasher, SessionRecord};
use crate::config::FlowConfig;
use crate::store::{KeyValueStore, load_users, save_session};
use crate::validation::validate;

/// Something the user did on the login screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    Input(LoginField, String),
    TogglePasswordVisibility,
    Submit,
}

/// Result of one login transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginTransition {
    Updated,
    /// Fields that failed validation
    Rejected(Vec<LoginField>),
    /// No stored account matched
    UnknownUser,
    /// Session written; the screen should navigate to `redirect`
    Authenticated {
        session: SessionRecord,
        redirect: String,
    },
}

/// Login screen state machine
pub struct LoginFlow<S> {
    store: S,
    hasher: PasswordHasher,
    config: FlowConfig,
    state: LoginState,
}

impl<S: KeyValueStore> LoginFlow<S> {
    /// Create a login flow over `store`
    ///
    /// # Errors
    ///
    /// * `FlowError::InvalidHashParams` - `config.hash_cost` is unusable
    pub fn new(store: S, config: FlowConfig) -> FlowResult<Self> {
        Ok(Self {
            store,
            hasher: PasswordHasher::new(config.hash_cost)?,
            config,
            state: LoginState::new(),
        })
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply one event and report what happened
    pub fn dispatch(&mut self, event: LoginEvent) -> FlowResult<LoginTransition> {
        match event {
            LoginEvent::Input(LoginField::Email, value) => self.state.form.email = value,
            LoginEvent::Input(LoginField::Pw, value) => self.state.form.pw = value,
            LoginEvent::TogglePasswordVisibility => {
                self.state.password_masked = !self.state.password_masked;
            }
            LoginEvent::Submit => return self.submit(),
        }
        Ok(LoginTransition::Updated)
    }

    fn submit(&mut self) -> FlowResult<LoginTransition> {
        let state = &mut self.state;

        if let Err(fields) = validate(&state.form, &mut state.errors, self.config.validation_mode)
        {
            log::debug!("login rejected, invalid fields: {fields:?}");
            return Ok(LoginTransition::Rejected(fields));
        }

        let matched = load_users(&self.store, &self.config.users_key)?
            .unwrap_or_default()
            .into_iter()
            .find(|user| {
                user.email == state.form.email && self.hasher.verify(&state.form.pw, &user.pw)
            });

        let Some(user) = matched else {
            log::warn!("login failed for {}: unknown user", state.form.email);
            state.unknown_user = true;
            return Ok(LoginTransition::UnknownUser);
        };

        let session = SessionRecord::start(user);
        save_session(&mut self.store, &self.config.session_key, &session)?;
        state.unknown_user = false;

        log::info!("user {} logged in", session.user.id);
        Ok(LoginTransition::Authenticated {
            session,
            redirect: self.config.home_path.clone(),
        })
    }
}
