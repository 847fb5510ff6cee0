//! Repository traits (ports) - define the interface for data access
//!
//! The login repository is split into four capabilities so callers can
//! depend on the narrowest one they need. `LoginRepository` is the union and
//! is implemented automatically for any type providing all four.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Login, NewLogin};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Finder
// ============================================================================

#[async_trait]
pub trait LoginFinder: Send + Sync {
    /// Find a login by its uuid. Fails with `LoginNotFound` when absent.
    async fn find_by_uuid(&self, uuid: Uuid) -> RepoResult<Login>;

    /// Find a login by its name. Fails with `LoginNotFound` when absent.
    async fn find_by_login(&self, login: &str) -> RepoResult<Login>;
}

// ============================================================================
// Saver
// ============================================================================

#[async_trait]
pub trait LoginSaver: Send + Sync {
    /// Insert a new login.
    ///
    /// Generates the uuid and stamps `created_at`; returns the stored record.
    /// A duplicate name fails with `LoginAlreadyExists`.
    async fn insert(&self, candidate: &NewLogin) -> RepoResult<Login>;

    /// Replace the mutable fields of the login identified by `login.uuid`.
    ///
    /// Stamps `updated_at`. `created_at` is written only when present.
    /// Callers must pass a previously read record. Fails with
    /// `LoginNotFound` when no row matched.
    async fn update(&self, login: &Login) -> RepoResult<Login>;
}

// ============================================================================
// Blocker
// ============================================================================

#[async_trait]
pub trait LoginBlocker: Send + Sync {
    /// Mark the login as banned and stamp `updated_at`.
    ///
    /// Re-banning succeeds. Fails with `LoginNotFound` when no row matched.
    async fn ban_by_uuid(&self, uuid: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Getter
// ============================================================================

#[async_trait]
pub trait LoginGetter: Send + Sync {
    /// Total number of logins
    async fn count(&self) -> RepoResult<i64>;

    /// One page of logins in insertion order.
    ///
    /// `page` is zero-based. An empty result fails with `EmptyPage`.
    async fn page(&self, page: u32, limit: u32) -> RepoResult<Vec<Login>>;
}

// ============================================================================
// Repository
// ============================================================================

/// Full login repository contract
pub trait LoginRepository: LoginFinder + LoginSaver + LoginBlocker + LoginGetter {}

impl<T> LoginRepository for T where T: LoginFinder + LoginSaver + LoginBlocker + LoginGetter {}
