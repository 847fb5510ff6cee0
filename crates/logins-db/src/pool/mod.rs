//! Database connection pool management

mod postgres;
mod schema;

pub use postgres::{create_pool, ping, statement_timeout_from_millis, DatabaseConfig};
pub use schema::{ensure_schema, SCHEMA_SQL};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
