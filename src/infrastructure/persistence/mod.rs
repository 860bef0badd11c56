//! Record store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::UrlRepository`].
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL table with upsert writes
//! - [`RedisUrlRepository`] - One Redis hash per record
//! - [`MemoryUrlRepository`] - Process-local map for development and tests

pub mod memory_url_repository;
pub mod pg_url_repository;
pub mod redis_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
pub use redis_url_repository::RedisUrlRepository;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlRepository;

/// Builds the store client selected by `STORE_BACKEND`.
///
/// # Errors
///
/// Returns an error if the backend's connection settings are missing or the
/// connection cannot be established.
pub async fn connect_repository(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Connected to database");

            let repository = PgUrlRepository::new(Arc::new(pool), config.store_table.clone());
            repository
                .ensure_schema()
                .await
                .context("Failed to prepare record table")?;

            Ok(Arc::new(repository))
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL must be set for the redis backend")?;

            let repository = RedisUrlRepository::connect(redis_url, &config.store_table)
                .await
                .context("Failed to connect to Redis")?;

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; records are lost on exit");
            Ok(Arc::new(MemoryUrlRepository::new()))
        }
    }
}
