//! Test fixtures and data generators
//!
//! The tests share one database, so every login name is unique per run.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique login name with a readable prefix
pub fn unique_login(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Create login request
#[derive(Debug, Serialize)]
pub struct CreateLoginRequest {
    pub login: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub banned: bool,
}

impl CreateLoginRequest {
    pub fn unique() -> Self {
        Self::named(unique_login("user"))
    }

    pub fn named(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            banned: false,
        }
    }
}

/// Update login request
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoginRequest {
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UpdateLoginRequest {
    pub fn rename(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Self::default()
        }
    }
}

/// Login as returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub uuid: Uuid,
    pub login: String,
    pub banned: bool,
    pub created_at: Option<String>,
    #[serde(rename = "updateAt")]
    pub updated_at: Option<String>,
}

/// Listing metadata
#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub count: i64,
    pub page: u32,
    pub limit: u32,
}

/// Listing body
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub meta: PageMeta,
    pub records: Vec<LoginResponse>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
