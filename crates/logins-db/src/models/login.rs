//! Login database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the logins table
#[derive(Debug, Clone, FromRow)]
pub struct LoginModel {
    pub id: i64,
    pub uuid: Uuid,
    pub login: String,
    pub banned: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
