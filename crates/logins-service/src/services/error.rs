//! Service layer error types

use logins_common::{domain_status_code, AppError};
use logins_core::DomainError;

/// Failure of a login use case
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Outcome reported by the repository: unknown login, duplicate name,
    /// store failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Well-formed request that the stored record does not allow
    #[error("Validation error: {0}")]
    Validation(String),

    /// `ServiceContextBuilder::build` without a required dependency
    #[error("Missing service dependency: {0}")]
    MissingDependency(&'static str),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::Validation(_) => 400,
            Self::MissingDependency(_) => 500,
        }
    }

    /// Error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MissingDependency(_) => "CONFIG_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::MissingDependency(name) => {
                AppError::Config(format!("missing service dependency: {name}"))
            }
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
