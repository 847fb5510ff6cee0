//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use logins_core::NewLogin;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Maximum accepted length of a login name
pub const MAX_LOGIN_LENGTH: u64 = 255;

/// Login names may not be blank
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Login must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Create login request
///
/// Any `uuid` or timestamps in the body are ignored; the repository assigns
/// them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoginRequest {
    #[validate(
        length(min = 1, max = 255, message = "Login must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub login: String,

    #[serde(default)]
    pub banned: bool,
}

impl From<CreateLoginRequest> for NewLogin {
    fn from(request: CreateLoginRequest) -> Self {
        NewLogin::new(request.login).banned(request.banned)
    }
}

/// Update login request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoginRequest {
    #[validate(
        length(min = 1, max = 255, message = "Login must be 1-255 characters"),
        custom(function = "not_blank")
    )]
    pub login: String,

    /// Omitted keeps the stored flag
    pub banned: Option<bool>,

    /// Omitted keeps the stored creation time
    pub created_at: Option<DateTime<Utc>>,
}
