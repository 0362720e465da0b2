#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use short_links::domain::StoreError;
use short_links::domain::entities::{CodeScore, Link, NewLink};
use short_links::domain::repositories::{LinkRepository, MetricsRepository};
use short_links::infrastructure::metrics::InMemoryMetricsRepository;
use short_links::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use short_links::routes::router;
use short_links::state::AppState;

/// Stores behind a test server, kept so tests can seed and inspect them.
pub struct TestStores {
    pub links: Arc<InMemoryLinkRepository>,
    pub metrics: Arc<InMemoryMetricsRepository>,
}

pub fn create_memory_state() -> (AppState, TestStores) {
    let links = Arc::new(InMemoryLinkRepository::new());
    let metrics = Arc::new(InMemoryMetricsRepository::new());

    let state = AppState::new(links.clone(), metrics.clone());

    (state, TestStores { links, metrics })
}

pub fn create_test_server() -> (TestServer, TestStores) {
    let (state, stores) = create_memory_state();
    let server = TestServer::new(router(state)).unwrap();

    (server, stores)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(PgLinkRepository::new(Arc::new(pool))),
        Arc::new(InMemoryMetricsRepository::new()),
    )
}

pub async fn create_test_link(repo: &dyn LinkRepository, code: &str, url: &str) -> i64 {
    repo.create(NewLink::new(code, url)).await.unwrap().id
}

pub async fn all_links(repo: &dyn LinkRepository) -> Vec<Link> {
    repo.list_newest_first().await.unwrap()
}

pub async fn clicks_for(repo: &dyn MetricsRepository, code: &str) -> Option<i64> {
    repo.range_by_score(i64::MIN, i64::MAX)
        .await
        .unwrap()
        .into_iter()
        .find(|s| s.code == code)
        .map(|s| s.score)
}

/// Link store whose lookups never find anything, so every create reaches
/// the uniqueness check of the wrapped store, as two racing requests do.
pub struct RacingLinkRepository {
    pub inner: Arc<InMemoryLinkRepository>,
}

#[async_trait]
impl LinkRepository for RacingLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        self.inner.create(new_link).await
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, StoreError> {
        Ok(None)
    }

    async fn list_newest_first(&self) -> Result<Vec<Link>, StoreError> {
        self.inner.list_newest_first().await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}

pub fn create_racing_server() -> (TestServer, TestStores) {
    let links = Arc::new(InMemoryLinkRepository::new());
    let metrics = Arc::new(InMemoryMetricsRepository::new());

    let state = AppState::new(
        Arc::new(RacingLinkRepository {
            inner: links.clone(),
        }),
        metrics.clone(),
    );
    let server = TestServer::new(router(state)).unwrap();

    (server, TestStores { links, metrics })
}

/// Metrics store whose every operation fails as if Redis were down.
pub struct UnreachableMetricsRepository;

#[async_trait]
impl MetricsRepository for UnreachableMetricsRepository {
    async fn increment(&self, _code: &str, _amount: i64) -> Result<i64, StoreError> {
        Err(StoreError::Transient("connection refused".to_string()))
    }

    async fn range_by_score(&self, _min: i64, _max: i64) -> Result<Vec<CodeScore>, StoreError> {
        Err(StoreError::Transient("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
