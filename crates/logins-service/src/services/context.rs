//! Service context - dependency container for services

use std::sync::Arc;

use logins_core::LoginRepository;
use logins_db::{PgLoginRepository, PgPool};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Holds the database pool (for readiness checks) and the login repository
/// every use case goes through.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    login_repo: Arc<dyn LoginRepository>,
}

impl ServiceContext {
    pub fn new(pool: PgPool, login_repo: Arc<dyn LoginRepository>) -> Self {
        Self { pool, login_repo }
    }

    /// Context backed by the PostgreSQL repository and its pool
    pub fn from_repository(repo: PgLoginRepository) -> Self {
        Self::new(repo.pool().clone(), Arc::new(repo))
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the login repository
    pub fn login_repo(&self) -> &dyn LoginRepository {
        self.login_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("login_repo", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    login_repo: Option<Arc<dyn LoginRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn login_repo(mut self, repo: Arc<dyn LoginRepository>) -> Self {
        self.login_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` naming the first unset field
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self.pool.ok_or(ServiceError::MissingDependency("pool"))?;
        let login_repo = self
            .login_repo
            .ok_or(ServiceError::MissingDependency("login_repo"))?;

        Ok(ServiceContext::new(pool, login_repo))
    }
}
