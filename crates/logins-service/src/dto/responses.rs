//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use logins_core::Login;
use serde::Serialize;
use uuid::Uuid;

use crate::services::LoginPage;

use super::pagination::PageParams;

// ============================================================================
// Login Responses
// ============================================================================

/// Login as exposed over HTTP. The surrogate id stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub uuid: Uuid,
    pub login: String,
    pub banned: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updateAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Login> for LoginResponse {
    fn from(login: &Login) -> Self {
        Self {
            uuid: login.uuid,
            login: login.login.clone(),
            banned: login.banned,
            created_at: login.created_at,
            updated_at: login.updated_at,
        }
    }
}

impl From<Login> for LoginResponse {
    fn from(login: Login) -> Self {
        Self {
            uuid: login.uuid,
            login: login.login,
            banned: login.banned,
            created_at: login.created_at,
            updated_at: login.updated_at,
        }
    }
}

// ============================================================================
// Listing Responses
// ============================================================================

/// One page of logins with its metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub meta: PageMeta,
    pub records: Vec<LoginResponse>,
}

/// Listing metadata, echoed in the pagination headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Total number of logins
    pub count: i64,
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
}

impl PageResponse {
    pub fn new(page: LoginPage, params: PageParams) -> Self {
        Self {
            meta: PageMeta {
                count: page.total_count,
                page: params.page,
                limit: params.limit,
            },
            records: page.records.into_iter().map(LoginResponse::from).collect(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
