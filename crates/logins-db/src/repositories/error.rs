//! Error handling utilities for repositories

use logins_core::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Name of the unique constraint on `logins.login`
pub const LOGIN_UNIQUE_CONSTRAINT: &str = "logins_login_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a violation of the login uniqueness constraint to `LoginAlreadyExists`
pub fn map_login_conflict(e: SqlxError, login: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(LOGIN_UNIQUE_CONSTRAINT) {
            return DomainError::LoginAlreadyExists(login.to_string());
        }
    }
    map_db_error(e)
}

/// Create a "login not found" error for a uuid lookup
pub fn login_not_found(uuid: Uuid) -> DomainError {
    DomainError::LoginNotFound(uuid.to_string())
}
