//! Process-local implementation of the record store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortUrlRecord, ShortUrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};

/// In-memory record store.
///
/// Records live for the lifetime of the process. Used for local development
/// (`STORE_BACKEND=memory`) and tests.
#[derive(Default)]
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<String, ShortUrlRecord>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record as-is, bypassing the write model.
    ///
    /// Lets callers seed records that lack a destination or owner.
    pub async fn insert_raw(&self, record: ShortUrlRecord) {
        self.records
            .write()
            .await
            .insert(record.short_id.clone(), record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn put(&self, record: NewShortUrlRecord) -> Result<(), StoreError> {
        self.insert_raw(record.into()).await;
        Ok(())
    }

    async fn get(&self, short_id: &str) -> Result<Option<ShortUrlRecord>, StoreError> {
        Ok(self.records.read().await.get(short_id).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
