//! Repository trait for short URL records.

use crate::domain::entities::{NewShortUrlRecord, ShortUrlRecord};
use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(e.to_string())
            }
            other => Self::Backend(other.to_string()),
        }
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        if e.is_io_error() || e.is_connection_refusal() {
            Self::Unavailable(e.to_string())
        } else {
            Self::Backend(e.to_string())
        }
    }
}

/// Key-value access to short URL records.
///
/// Implementations provide atomic single-key put and get. `put` is an
/// unconditional upsert: writing an existing key replaces its record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL table
/// - [`crate::infrastructure::persistence::RedisUrlRepository`] - Redis hashes
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Writes a record, replacing any record stored under the same key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects or cannot complete the write.
    async fn put(&self, record: NewShortUrlRecord) -> Result<(), StoreError>;

    /// Fetches the record stored under `short_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if a record exists
    /// - `Ok(None)` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot complete the read.
    async fn get(&self, short_id: &str) -> Result<Option<ShortUrlRecord>, StoreError>;

    /// Checks backend connectivity.
    async fn health_check(&self) -> bool;
}
