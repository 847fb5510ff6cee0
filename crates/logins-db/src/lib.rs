//! # logins-db
//!
//! PostgreSQL implementation of the login repository via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgLoginRepository`, implementing every login capability
//!
//! ## Usage
//!
//! ```rust,ignore
//! use logins_db::{create_pool, ensure_schema, DatabaseConfig, PgLoginRepository};
//! use logins_core::LoginGetter;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgres://localhost/logins");
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!
//!     let repo = PgLoginRepository::with_defaults(pool);
//!     let total = repo.count().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_pool, ensure_schema, ping, statement_timeout_from_millis, DatabaseConfig, PgPool,
};
pub use repositories::PgLoginRepository;
