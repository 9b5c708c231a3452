//! Field predicates.
//!
//! Every predicate is total: it answers `true` or `false` for any input.

use regex::Regex;
use std::sync::LazyLock;

use crate::auth::AuthorityLevel;
use crate::constants::{DATE_OF_BIRTH_LEN, MIN_PASSWORD_LEN};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*@[0-9a-zA-Z]([-_.]?[0-9a-zA-Z])*\.[a-zA-Z]{2,3}$")
        .expect("email pattern compiles")
});

/// Hangul full name, or Latin words separated by single spaces.
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[가-힣]{2,5}|[a-zA-Z]+(?: [a-zA-Z]+)*)$").expect("name pattern compiles")
});

static CREDIT_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{16}|[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4})$")
        .expect("card pattern compiles")
});

const MAX_LATIN_NAME_LEN: usize = 30;

/// Live password-policy flags, one per rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Contains an ASCII letter
    pub has_letter: bool,
    /// Contains an ASCII digit
    pub has_digit: bool,
    /// Contains an ASCII punctuation character
    pub has_special: bool,
    /// At least `MIN_PASSWORD_LEN` characters
    pub min_length: bool,
}

impl PasswordPolicy {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_letter: password.chars().any(|c| c.is_ascii_alphabetic()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| c.is_ascii_punctuation()),
            min_length: password.chars().count() >= MIN_PASSWORD_LEN,
        }
    }

    /// All four rules hold
    pub fn is_satisfied(&self) -> bool {
        self.has_letter && self.has_digit && self.has_special && self.min_length
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

pub fn is_password(value: &str) -> bool {
    PasswordPolicy::evaluate(value).is_satisfied()
}

pub fn is_password_confirmed(confirmation: &str, password: &str) -> bool {
    confirmation == password
}

pub fn is_name(value: &str) -> bool {
    let is_latin = value.is_ascii();
    NAME.is_match(value) && (!is_latin || (2..=MAX_LATIN_NAME_LEN).contains(&value.len()))
}

pub fn is_not_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Six ASCII digits, `YYMMDD`
pub fn is_date_of_birth(value: &str) -> bool {
    value.len() == DATE_OF_BIRTH_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

/// Sixteen ASCII digits, either ungrouped or as `dddd-dddd-dddd-dddd`
pub fn is_credit_card_num(value: &str) -> bool {
    CREDIT_CARD.is_match(value)
}

pub fn is_authority_selected(value: AuthorityLevel) -> bool {
    value != AuthorityLevel::Unknown
}
