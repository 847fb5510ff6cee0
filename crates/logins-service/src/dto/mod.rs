//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Page parameters shared by the listing endpoint and the service

pub mod pagination;
pub mod requests;
pub mod responses;

pub use pagination::PageParams;
pub use requests::{CreateLoginRequest, UpdateLoginRequest};
pub use responses::{
    HealthChecks, HealthResponse, LoginResponse, PageMeta, PageResponse, ReadinessResponse,
};
