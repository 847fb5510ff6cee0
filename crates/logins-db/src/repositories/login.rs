//! PostgreSQL implementation of the login capabilities

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use logins_core::{
    Clock, DomainError, Login, LoginBlocker, LoginFinder, LoginGetter, LoginSaver, NewLogin,
    PageBounds, PageWindow, RandomUuidGenerator, RepoResult, SystemClock, UuidGenerator,
};

use crate::mappers::{LoginInsert, LoginUpdate};
use crate::models::LoginModel;

use super::error::{login_not_found, map_db_error, map_login_conflict};

/// PostgreSQL implementation of `LoginRepository`
#[derive(Clone)]
pub struct PgLoginRepository {
    pool: PgPool,
    window: PageWindow,
    clock: Arc<dyn Clock>,
    uuids: Arc<dyn UuidGenerator>,
}

impl PgLoginRepository {
    /// Create a new PgLoginRepository with injected time and uuid sources
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>, uuids: Arc<dyn UuidGenerator>) -> Self {
        Self {
            pool,
            window: PageWindow::default(),
            clock,
            uuids,
        }
    }

    /// Repository using the system clock and random v4 uuids
    pub fn with_defaults(pool: PgPool) -> Self {
        Self::new(pool, Arc::new(SystemClock), Arc::new(RandomUuidGenerator))
    }

    /// Select the page windowing strategy
    pub fn with_window(mut self, window: PageWindow) -> Self {
        self.window = window;
        self
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl LoginFinder for PgLoginRepository {
    #[instrument(skip(self))]
    async fn find_by_uuid(&self, uuid: Uuid) -> RepoResult<Login> {
        let result = sqlx::query_as::<_, LoginModel>(
            r"
            SELECT id, uuid, login, banned, created_at, updated_at
            FROM logins
            WHERE uuid = $1
            ",
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Login::from).ok_or_else(|| login_not_found(uuid))
    }

    #[instrument(skip(self))]
    async fn find_by_login(&self, login: &str) -> RepoResult<Login> {
        let result = sqlx::query_as::<_, LoginModel>(
            r"
            SELECT id, uuid, login, banned, created_at, updated_at
            FROM logins
            WHERE login = $1
            ",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(Login::from)
            .ok_or_else(|| DomainError::LoginNotFound(login.to_string()))
    }
}

#[async_trait]
impl LoginSaver for PgLoginRepository {
    #[instrument(skip(self), fields(login = %candidate.login))]
    async fn insert(&self, candidate: &NewLogin) -> RepoResult<Login> {
        let insert = LoginInsert::new(candidate, self.uuids.generate(), self.clock.now());

        let model = sqlx::query_as::<_, LoginModel>(
            r"
            INSERT INTO logins (uuid, login, banned, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NULL)
            RETURNING id, uuid, login, banned, created_at, updated_at
            ",
        )
        .bind(insert.uuid)
        .bind(insert.login)
        .bind(insert.banned)
        .bind(insert.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_login_conflict(e, insert.login))?;

        debug!(id = model.id, uuid = %model.uuid, "login inserted");
        Ok(Login::from(model))
    }

    #[instrument(skip(self), fields(uuid = %login.uuid))]
    async fn update(&self, login: &Login) -> RepoResult<Login> {
        let update = LoginUpdate::new(login, self.clock.now());

        let result = sqlx::query_as::<_, LoginModel>(
            r"
            UPDATE logins
            SET login = $2,
                banned = $3,
                created_at = COALESCE($4, created_at),
                updated_at = $5
            WHERE uuid = $1
            RETURNING id, uuid, login, banned, created_at, updated_at
            ",
        )
        .bind(update.uuid)
        .bind(update.login)
        .bind(update.banned)
        .bind(update.created_at)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_login_conflict(e, update.login))?;

        result
            .map(Login::from)
            .ok_or_else(|| login_not_found(update.uuid))
    }
}

#[async_trait]
impl LoginBlocker for PgLoginRepository {
    #[instrument(skip(self))]
    async fn ban_by_uuid(&self, uuid: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE logins
            SET banned = TRUE, updated_at = $2
            WHERE uuid = $1
            ",
        )
        .bind(uuid)
        .bind(self.clock.now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(login_not_found(uuid));
        }

        Ok(true)
    }
}

#[async_trait]
impl LoginGetter for PgLoginRepository {
    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM logins")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(window = %self.window))]
    async fn page(&self, page: u32, limit: u32) -> RepoResult<Vec<Login>> {
        let query = match self.window.bounds(page, limit) {
            PageBounds::Offset { offset, limit } => sqlx::query_as::<_, LoginModel>(
                r"
                SELECT id, uuid, login, banned, created_at, updated_at
                FROM logins
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
                ",
            )
            .bind(limit)
            .bind(offset),
            PageBounds::IdRange { after, before } => sqlx::query_as::<_, LoginModel>(
                r"
                SELECT id, uuid, login, banned, created_at, updated_at
                FROM logins
                WHERE id > $1 AND id < $2
                ORDER BY id ASC
                ",
            )
            .bind(after)
            .bind(before),
        };

        let models = query.fetch_all(&self.pool).await.map_err(map_db_error)?;

        if models.is_empty() {
            return Err(DomainError::EmptyPage { page, limit });
        }

        Ok(models.into_iter().map(Login::from).collect())
    }
}
