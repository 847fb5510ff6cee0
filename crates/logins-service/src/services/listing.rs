//! Pagination aggregator
//!
//! Combines the total count and one page of records into a single result.
//! Both store calls run concurrently; the first hard failure aborts the
//! other. A page past the end is not a failure here and yields no records.

use logins_core::{DomainError, Login, LoginGetter, RepoResult};
use tracing::{debug, instrument};

/// Total record count plus the records of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPage {
    pub total_count: i64,
    pub records: Vec<Login>,
}

/// Fetch `count` and the zero-based page `page_index` concurrently.
///
/// `EmptyPage` is folded into an empty record list. Any other error from
/// either call is returned as-is and drops the call still in flight.
/// The two reads are not taken from one snapshot.
#[instrument(skip(repo))]
pub async fn fetch_page<R>(repo: &R, page_index: u32, limit: u32) -> RepoResult<LoginPage>
where
    R: LoginGetter + ?Sized,
{
    let records = async {
        match repo.page(page_index, limit).await {
            Err(DomainError::EmptyPage { .. }) => Ok(Vec::new()),
            other => other,
        }
    };

    let (total_count, records) = tokio::try_join!(repo.count(), records)?;
    debug!(total_count, returned = records.len(), "page fetched");

    Ok(LoginPage {
        total_count,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use logins_core::testing::{InMemoryLoginRepository, SteppingClock};
    use logins_core::{LoginSaver, NewLogin, RandomUuidGenerator};
    use tokio::sync::Barrier;

    async fn seeded(names: &[&str]) -> InMemoryLoginRepository {
        let repo = InMemoryLoginRepository::new(
            Arc::new(SteppingClock::default()),
            Arc::new(RandomUuidGenerator),
        );
        for name in names {
            repo.insert(&NewLogin::new(*name)).await.unwrap();
        }
        repo
    }

    fn names(page: &LoginPage) -> Vec<&str> {
        page.records.iter().map(|l| l.login.as_str()).collect()
    }

    #[tokio::test]
    async fn test_three_logins_two_per_page() {
        let repo = seeded(&["alice", "bob", "carol"]).await;

        let first = fetch_page(&repo, 0, 2).await.unwrap();
        assert_eq!(first.total_count, 3);
        assert_eq!(names(&first), ["alice", "bob"]);

        let second = fetch_page(&repo, 1, 2).await.unwrap();
        assert_eq!(second.total_count, 3);
        assert_eq!(names(&second), ["carol"]);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let repo = seeded(&["alice", "bob", "carol"]).await;

        let page = fetch_page(&repo, 2, 2).await.unwrap();
        assert_eq!(page.total_count, 3);
        assert!(page.records.is_empty());
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = seeded(&[]).await;

        let page = fetch_page(&repo, 0, 20).await.unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.records.is_empty());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let repo: Arc<dyn logins_core::LoginRepository> = Arc::new(seeded(&["alice"]).await);

        let page = fetch_page(repo.as_ref(), 0, 10).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(names(&page), ["alice"]);
    }

    /// Getter whose calls each wait for the other before answering
    struct RendezvousGetter {
        barrier: Barrier,
    }

    #[async_trait]
    impl LoginGetter for RendezvousGetter {
        async fn count(&self) -> RepoResult<i64> {
            self.barrier.wait().await;
            Ok(0)
        }

        async fn page(&self, page: u32, limit: u32) -> RepoResult<Vec<Login>> {
            self.barrier.wait().await;
            Err(DomainError::EmptyPage { page, limit })
        }
    }

    #[tokio::test]
    async fn test_count_and_page_run_concurrently() {
        let repo = RendezvousGetter {
            barrier: Barrier::new(2),
        };

        let page = tokio::time::timeout(Duration::from_secs(5), fetch_page(&repo, 0, 20))
            .await
            .expect("count and page must be in flight together")
            .unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.records.is_empty());
    }

    /// Getter where one call fails and the other never finishes
    struct FailingGetter {
        fail_count: bool,
        other_finished: AtomicBool,
    }

    impl FailingGetter {
        fn new(fail_count: bool) -> Self {
            Self {
                fail_count,
                other_finished: AtomicBool::new(false),
            }
        }

        async fn stall(&self) {
            std::future::pending::<()>().await;
            self.other_finished.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl LoginGetter for FailingGetter {
        async fn count(&self) -> RepoResult<i64> {
            if self.fail_count {
                return Err(DomainError::DatabaseError("connection refused".to_string()));
            }
            self.stall().await;
            Ok(0)
        }

        async fn page(&self, _page: u32, _limit: u32) -> RepoResult<Vec<Login>> {
            if !self.fail_count {
                return Err(DomainError::DatabaseError("statement timeout".to_string()));
            }
            self.stall().await;
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_count_failure_aborts_page() {
        let repo = FailingGetter::new(true);

        let err = tokio::time::timeout(Duration::from_secs(5), fetch_page(&repo, 0, 20))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(ref msg) if msg == "connection refused"));
        assert!(!repo.other_finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_page_failure_aborts_count() {
        let repo = FailingGetter::new(false);

        let err = tokio::time::timeout(Duration::from_secs(5), fetch_page(&repo, 0, 20))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(ref msg) if msg == "statement timeout"));
        assert!(!repo.other_finished.load(Ordering::SeqCst));
    }
}
