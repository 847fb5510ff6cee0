//! Schema bootstrap for the `logins` table

use sqlx::PgPool;
use tracing::info;

/// DDL for the `logins` table. Idempotent.
pub const SCHEMA_SQL: &str = include_str!("../../migrations/0001_create_logins.sql");

/// Create the `logins` table if it does not exist yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    info!("logins schema ready");
    Ok(())
}
