//! In-memory login repository for tests
//!
//! Mirrors the PostgreSQL repository's contract: sequential surrogate ids,
//! unique uuid and login, `EmptyPage` past the end, and `LoginNotFound` on
//! zero matched rows.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::entities::{Login, NewLogin};
use crate::error::DomainError;
use crate::providers::{Clock, RandomUuidGenerator, SystemClock, UuidGenerator};
use crate::traits::{LoginBlocker, LoginFinder, LoginGetter, LoginSaver, RepoResult};
use crate::value_objects::{PageBounds, PageWindow};

/// Clock that advances by one second on every reading
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new(DateTime::UNIX_EPOCH)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

/// Thread-safe in-memory implementation of all four login capabilities
pub struct InMemoryLoginRepository {
    rows: Mutex<Vec<Login>>,
    next_id: AtomicI64,
    window: PageWindow,
    clock: Arc<dyn Clock>,
    uuids: Arc<dyn UuidGenerator>,
}

impl InMemoryLoginRepository {
    pub fn new(clock: Arc<dyn Clock>, uuids: Arc<dyn UuidGenerator>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            window: PageWindow::default(),
            clock,
            uuids,
        }
    }

    /// Select the page windowing strategy
    pub fn with_window(mut self, window: PageWindow) -> Self {
        self.window = window;
        self
    }

    /// Remove a row directly, leaving a gap in the id sequence
    pub fn remove_row(&self, uuid: Uuid) {
        self.rows.lock().retain(|row| row.uuid != uuid);
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl Default for InMemoryLoginRepository {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomUuidGenerator))
    }
}

#[async_trait]
impl LoginFinder for InMemoryLoginRepository {
    async fn find_by_uuid(&self, uuid: Uuid) -> RepoResult<Login> {
        self.rows
            .lock()
            .iter()
            .find(|row| row.uuid == uuid)
            .cloned()
            .ok_or_else(|| DomainError::LoginNotFound(uuid.to_string()))
    }

    async fn find_by_login(&self, login: &str) -> RepoResult<Login> {
        self.rows
            .lock()
            .iter()
            .find(|row| row.login == login)
            .cloned()
            .ok_or_else(|| DomainError::LoginNotFound(login.to_string()))
    }
}

#[async_trait]
impl LoginSaver for InMemoryLoginRepository {
    async fn insert(&self, candidate: &NewLogin) -> RepoResult<Login> {
        let mut rows = self.rows.lock();

        if rows.iter().any(|row| row.login == candidate.login) {
            return Err(DomainError::LoginAlreadyExists(candidate.login.clone()));
        }

        let login = Login {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            uuid: self.uuids.generate(),
            login: candidate.login.clone(),
            banned: candidate.banned,
            created_at: Some(self.clock.now()),
            updated_at: None,
        };
        rows.push(login.clone());

        Ok(login)
    }

    async fn update(&self, login: &Login) -> RepoResult<Login> {
        let mut rows = self.rows.lock();

        // zero matched rows wins over the unique index, as in PostgreSQL
        let index = rows
            .iter()
            .position(|row| row.uuid == login.uuid)
            .ok_or_else(|| DomainError::LoginNotFound(login.uuid.to_string()))?;

        if rows
            .iter()
            .any(|row| row.login == login.login && row.uuid != login.uuid)
        {
            return Err(DomainError::LoginAlreadyExists(login.login.clone()));
        }

        let now = self.clock.now();
        let row = &mut rows[index];

        row.login.clone_from(&login.login);
        row.banned = login.banned;
        if login.created_at.is_some() {
            row.created_at = login.created_at;
        }
        row.updated_at = Some(now);

        Ok(row.clone())
    }
}

#[async_trait]
impl LoginBlocker for InMemoryLoginRepository {
    async fn ban_by_uuid(&self, uuid: Uuid) -> RepoResult<bool> {
        let now = self.clock.now();
        let mut rows = self.rows.lock();
        let row = rows
            .iter_mut()
            .find(|row| row.uuid == uuid)
            .ok_or_else(|| DomainError::LoginNotFound(uuid.to_string()))?;

        row.banned = true;
        row.updated_at = Some(now);

        Ok(true)
    }
}

#[async_trait]
impl LoginGetter for InMemoryLoginRepository {
    async fn count(&self) -> RepoResult<i64> {
        Ok(self.rows.lock().len() as i64)
    }

    async fn page(&self, page: u32, limit: u32) -> RepoResult<Vec<Login>> {
        let rows = self.rows.lock();

        let records: Vec<Login> = match self.window.bounds(page, limit) {
            PageBounds::Offset { offset, limit } => rows
                .iter()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            PageBounds::IdRange { after, before } => rows
                .iter()
                .filter(|row| row.id > after && row.id < before)
                .cloned()
                .collect(),
        };

        if records.is_empty() {
            return Err(DomainError::EmptyPage { page, limit });
        }

        Ok(records)
    }
}
