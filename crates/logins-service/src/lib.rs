//! # logins-service
//!
//! Application layer: login use cases, the pagination aggregator, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    fetch_page, LoginPage, LoginService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
