//! Login entity <-> model mapper

use chrono::{DateTime, Utc};
use logins_core::{Login, NewLogin};
use uuid::Uuid;

use crate::models::LoginModel;

impl From<LoginModel> for Login {
    fn from(model: LoginModel) -> Self {
        Login {
            id: model.id,
            uuid: model.uuid,
            login: model.login,
            banned: model.banned,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values bound by the insert statement
pub struct LoginInsert<'a> {
    pub uuid: Uuid,
    pub login: &'a str,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
}

impl<'a> LoginInsert<'a> {
    pub fn new(candidate: &'a NewLogin, uuid: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            uuid,
            login: &candidate.login,
            banned: candidate.banned,
            created_at: now,
        }
    }
}

/// Values bound by the update statement
pub struct LoginUpdate<'a> {
    pub uuid: Uuid,
    pub login: &'a str,
    pub banned: bool,
    /// Written only when present
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> LoginUpdate<'a> {
    pub fn new(login: &'a Login, now: DateTime<Utc>) -> Self {
        Self {
            uuid: login.uuid,
            login: &login.login,
            banned: login.banned,
            created_at: login.created_at,
            updated_at: now,
        }
    }
}
