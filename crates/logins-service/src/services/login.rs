//! Login service
//!
//! Use cases behind the HTTP API. Each one is a thin call into the login
//! repository; listing goes through the pagination aggregator.

use logins_core::{LoginBlocker, LoginFinder, LoginGetter, LoginSaver, NewLogin};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateLoginRequest, LoginResponse, PageParams, PageResponse, UpdateLoginRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::listing::fetch_page;

/// Login service
pub struct LoginService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LoginService<'a> {
    /// Create a new LoginService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new login
    #[instrument(skip(self, request), fields(login = %request.login))]
    pub async fn create(&self, request: CreateLoginRequest) -> ServiceResult<LoginResponse> {
        let login = self
            .ctx
            .login_repo()
            .insert(&NewLogin::from(request))
            .await?;

        info!(uuid = %login.uuid, "Login created");

        Ok(LoginResponse::from(login))
    }

    /// Get login by uuid
    #[instrument(skip(self))]
    pub async fn get_by_uuid(&self, uuid: Uuid) -> ServiceResult<LoginResponse> {
        let login = self.ctx.login_repo().find_by_uuid(uuid).await?;
        Ok(LoginResponse::from(login))
    }

    /// Get login by name
    #[instrument(skip(self))]
    pub async fn get_by_login(&self, login: &str) -> ServiceResult<LoginResponse> {
        let login = self.ctx.login_repo().find_by_login(login).await?;
        Ok(LoginResponse::from(login))
    }

    /// Update a login.
    ///
    /// Reads the stored record first so fields missing from the request keep
    /// their stored values. A banned login cannot be unbanned.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        uuid: Uuid,
        request: UpdateLoginRequest,
    ) -> ServiceResult<LoginResponse> {
        let repo = self.ctx.login_repo();
        let mut login = repo.find_by_uuid(uuid).await?;

        if login.is_banned() && request.banned == Some(false) {
            return Err(ServiceError::validation("A banned login cannot be unbanned"));
        }

        login.rename(request.login);
        if let Some(banned) = request.banned {
            login.banned = banned;
        }
        if request.created_at.is_some() {
            login.created_at = request.created_at;
        }

        let updated = repo.update(&login).await?;

        info!(login = %updated.login, banned = updated.banned, "Login updated");

        Ok(LoginResponse::from(updated))
    }

    /// Ban a login. Banning twice succeeds.
    #[instrument(skip(self))]
    pub async fn ban(&self, uuid: Uuid) -> ServiceResult<()> {
        self.ctx.login_repo().ban_by_uuid(uuid).await?;

        info!("Login banned");

        Ok(())
    }

    /// Total number of logins
    #[instrument(skip(self))]
    pub async fn count(&self) -> ServiceResult<i64> {
        Ok(self.ctx.login_repo().count().await?)
    }

    /// One page of logins with the total count
    #[instrument(skip(self))]
    pub async fn list(&self, params: PageParams) -> ServiceResult<PageResponse> {
        let page = fetch_page(self.ctx.login_repo(), params.index(), params.limit).await?;
        Ok(PageResponse::new(page, params))
    }
}
