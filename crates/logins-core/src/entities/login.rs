//! Login entity - an identity record in the directory

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored login record.
///
/// `id` is the store-assigned surrogate key. It orders and windows pages and
/// is never used for lookups by clients; `uuid` and `login` are the two
/// external lookup keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login {
    pub id: i64,
    pub uuid: Uuid,
    pub login: String,
    pub banned: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Login {
    /// Check if the login has been banned
    #[inline]
    pub fn is_banned(&self) -> bool {
        self.banned
    }

    /// Check if the record has been mutated since insert
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Rename the login. Persisted only through `LoginSaver::update`.
    pub fn rename(&mut self, login: impl Into<String>) {
        self.login = login.into();
    }
}

/// Candidate for insertion.
///
/// Carries only the fields a client controls; uuid and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogin {
    pub login: String,
    pub banned: bool,
}

impl NewLogin {
    /// Create a candidate that is not banned
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            banned: false,
        }
    }

    /// Set the initial ban flag
    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }
}
