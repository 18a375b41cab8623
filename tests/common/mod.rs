#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use infinity_shortener::domain::repositories::{StorageError, UrlRepository};
use infinity_shortener::infrastructure::persistence::MemoryUrlRepository;
use infinity_shortener::routes::router;
use infinity_shortener::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const ALIAS_LENGTH: usize = 6;

/// Repository whose every call fails with an opaque database error.
///
/// Counts calls so tests can assert that storage was or was not reached.
#[derive(Default)]
pub struct FailingRepository {
    pub calls: AtomicUsize,
}

impl FailingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Database(sqlx::Error::PoolClosed))
    }
}

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn save_url(&self, _url: &str, _alias: &str) -> Result<i64, StorageError> {
        self.fail()
    }

    async fn get_url(&self, _alias: &str) -> Result<String, StorageError> {
        self.fail()
    }

    async fn delete_url(&self, _alias: &str) -> Result<String, StorageError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.fail()
    }
}

pub fn create_test_app(repository: Arc<dyn UrlRepository>) -> Router {
    router(
        AppState::new(repository, ALIAS_LENGTH),
        Duration::from_secs(5),
    )
}

pub fn create_test_server(repository: Arc<dyn UrlRepository>) -> TestServer {
    TestServer::new(create_test_app(repository)).unwrap()
}

/// Test server backed by in-memory storage, plus a handle on that storage.
pub fn create_memory_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let repo = Arc::new(MemoryUrlRepository::new());
    (create_test_server(repo.clone()), repo)
}

/// Test server whose storage always fails, plus a handle on that storage.
pub fn create_failing_server() -> (TestServer, Arc<FailingRepository>) {
    let repo = Arc::new(FailingRepository::default());
    (create_test_server(repo.clone()), repo)
}
