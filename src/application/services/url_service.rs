//! Create and resolve use cases over the record store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::domain::entities::{NewShortUrlRecord, ShortUrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::error::{AppError, NOT_FOUND_MESSAGE};

/// Service for registering and resolving short URLs.
///
/// Holds the long-lived store client shared by every invocation. Each store
/// call is bounded by `store_timeout`; nothing is retried.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    owner: String,
    store_timeout: Duration,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `owner` is stamped on every record written by [`Self::create`].
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        owner: impl Into<String>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            owner: owner.into(),
            store_timeout,
        }
    }

    /// Stores `long_url` under `short_id`, overwriting any existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the write fails or times out.
    pub async fn create(&self, short_id: String, long_url: String) -> Result<(), AppError> {
        info!(short_url = %short_id, long_url = %long_url, "Create request");

        let record = NewShortUrlRecord {
            short_id,
            long_url,
            owner: self.owner.clone(),
        };
        let short_id = record.short_id.clone();

        match self.bounded(self.repository.put(record)).await {
            Ok(()) => {
                info!(short_url = %short_id, "Stored short URL record");
                Ok(())
            }
            Err(e) => {
                error!(short_url = %short_id, error = %e, "Failed to store short URL record");
                Err(e.into())
            }
        }
    }

    /// Returns the destination stored under `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists or the record has no
    /// destination. Returns [`AppError::Internal`] if the read fails or times out.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        info!(short_url = %short_id, "Resolve request");

        let record = self.find(short_id).await?;

        match record.as_ref().and_then(ShortUrlRecord::destination) {
            Some(long_url) => {
                info!(short_url = %short_id, long_url = %long_url, "Resolved short URL");
                Ok(long_url.to_string())
            }
            None => {
                info!(
                    short_url = %short_id,
                    record_present = record.is_some(),
                    "Short URL not found"
                );
                Err(AppError::not_found(NOT_FOUND_MESSAGE))
            }
        }
    }

    /// Fetches the raw record stored under `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the read fails or times out.
    pub async fn find(&self, short_id: &str) -> Result<Option<ShortUrlRecord>, AppError> {
        self.bounded(self.repository.get(short_id))
            .await
            .map_err(|e| {
                error!(short_url = %short_id, error = %e, "Failed to fetch short URL record");
                e.into()
            })
    }

    /// Returns whether the store answers within the configured timeout.
    pub async fn health_check(&self) -> bool {
        tokio::time::timeout(self.store_timeout, self.repository.health_check())
            .await
            .unwrap_or(false)
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.store_timeout))?
    }
}
