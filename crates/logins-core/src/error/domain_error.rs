//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// A uuid- or login-scoped read or write matched zero rows
    #[error("Login not found: {0}")]
    LoginNotFound(String),

    // =========================================================================
    // Pagination
    // =========================================================================
    /// The requested page lies past the last record. Not a missing record.
    #[error("Page {page} is empty (limit {limit})")]
    EmptyPage { page: u32, limit: u32 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// Unique violation on the login name
    #[error("Login already exists: {0}")]
    LoginAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::LoginNotFound(_) => "UNKNOWN_LOGIN",
            Self::EmptyPage { .. } => "EMPTY_PAGE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::LoginAlreadyExists(_) => "LOGIN_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LoginNotFound(_))
    }

    /// Check if this is the past-the-end page sentinel
    pub fn is_empty_page(&self) -> bool {
        matches!(self, Self::EmptyPage { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::LoginAlreadyExists(_))
    }
}
