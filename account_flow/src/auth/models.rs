//! Account data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User ID type
pub type UserId = u64;

/// Account role chosen at signup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorityLevel {
    /// Nothing selected yet
    #[default]
    Unknown,
    Teacher,
    Parent,
}

impl fmt::Display for AuthorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorityLevel::Unknown => write!(f, "unknown"),
            AuthorityLevel::Teacher => write!(f, "teacher"),
            AuthorityLevel::Parent => write!(f, "parent"),
        }
    }
}

/// Stored user record
///
/// `pw` always holds a password hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub authority: AuthorityLevel,
    pub email: String,
    pub pw: String,
    pub name: String,
    pub address: String,
    pub detail_address: String,
    pub credit_card_num: String,
    pub date_of_birth: String,
}

/// Record of the currently logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(flatten)]
    pub user: UserRecord,
    pub logged_in_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Start a session for `user` now
    pub fn start(user: UserRecord) -> Self {
        Self {
            user,
            logged_in_at: Utc::now(),
        }
    }
}
