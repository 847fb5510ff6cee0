//! Axum extractors for request handling
//!
//! Custom extractors for typed path parameters, validation, and pagination.

mod pagination;
mod path;
mod validated;

pub use pagination::{Pagination, PaginationParams};
pub use path::{LoginPath, UuidPath};
pub use validated::ValidatedJson;
