#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use kv_url_shortener::application::services::UrlService;
use kv_url_shortener::domain::entities::{NewShortUrlRecord, ShortUrlRecord};
use kv_url_shortener::domain::repositories::{StoreError, UrlRepository};
use kv_url_shortener::infrastructure::persistence::MemoryUrlRepository;
use kv_url_shortener::routes::api_router;
use kv_url_shortener::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_OWNER: &str = "owner";

/// Store whose every call fails, as an unreachable backend would.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn put(&self, _record: NewShortUrlRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _short_id: &str) -> Result<Option<ShortUrlRecord>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_state(repository: Arc<dyn UrlRepository>) -> AppState {
    let service = UrlService::new(repository, TEST_OWNER, Duration::from_secs(5));
    AppState::new(Arc::new(service))
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    (create_state(repository.clone()), repository)
}

pub fn create_failing_state() -> AppState {
    create_state(Arc::new(FailingRepository))
}

pub fn test_server(state: AppState) -> TestServer {
    let app: Router = api_router(state);
    TestServer::new(app).unwrap()
}

pub async fn create_test_record(repository: &MemoryUrlRepository, short_id: &str, long_url: &str) {
    repository
        .put(NewShortUrlRecord {
            short_id: short_id.to_string(),
            long_url: long_url.to_string(),
            owner: TEST_OWNER.to_string(),
        })
        .await
        .unwrap();
}
