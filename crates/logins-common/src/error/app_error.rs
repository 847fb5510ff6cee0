//! Application error types
//!
//! Failures outside a single request: configuration, database bootstrap,
//! binding and serving. Request-level failures reach here only through
//! `From` conversions.

use logins_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pool creation or schema bootstrap failed
    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Domain(e) => domain_status_code(e),
            Self::Config(_) | Self::Database(_) | Self::Bind { .. } | Self::Serve(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Bind { .. } | Self::Serve(_) => "SERVER_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }
}

/// HTTP status for a domain error.
///
/// `EmptyPage` maps to 404 here; the listing endpoint never lets it escape.
#[must_use]
pub fn domain_status_code(err: &DomainError) -> u16 {
    if err.is_not_found() || err.is_empty_page() {
        404
    } else if err.is_validation() {
        400
    } else if err.is_conflict() {
        409
    } else {
        500
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
