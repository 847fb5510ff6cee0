//! Path parameter extractors
//!
//! Type-safe extraction of login identifiers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::response::ApiError;

/// Login uuid from the `:uuid` path segment
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Uuid::parse_str(raw.trim())
            .map(UuidPath)
            .map_err(|_| ApiError::invalid_path("Invalid uuid format"))
    }
}

/// Login name from the `:login` path segment
#[derive(Debug, Clone)]
pub struct LoginPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for LoginPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        if raw.trim().is_empty() {
            return Err(ApiError::invalid_path("Login must not be empty"));
        }

        Ok(LoginPath(raw))
    }
}
