//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrlRecord, ShortUrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};

/// PostgreSQL repository keeping one row per short identifier.
///
/// The table name comes from configuration and is validated as a plain SQL
/// identifier before it reaches this type; values are always bound.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
    table: String,
}

impl PgUrlRepository {
    /// Creates a new repository over `table`.
    pub fn new(pool: Arc<PgPool>, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    /// Creates the backing table if it does not exist yet.
    ///
    /// `long_url` and `owner` are nullable so rows written by other tools
    /// can still be read.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(&self.create_table_sql())
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }

    fn create_table_sql(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                short_id TEXT PRIMARY KEY,
                long_url TEXT,
                owner TEXT
            )",
            self.table
        )
    }

    fn upsert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (short_id, long_url, owner)
            VALUES ($1, $2, $3)
            ON CONFLICT (short_id)
            DO UPDATE SET long_url = EXCLUDED.long_url, owner = EXCLUDED.owner",
            self.table
        )
    }

    fn select_sql(&self) -> String {
        format!(
            "SELECT short_id, long_url, owner FROM {} WHERE short_id = $1",
            self.table
        )
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn put(&self, record: NewShortUrlRecord) -> Result<(), StoreError> {
        sqlx::query(&self.upsert_sql())
            .bind(record.short_id)
            .bind(record.long_url)
            .bind(record.owner)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn get(&self, short_id: &str) -> Result<Option<ShortUrlRecord>, StoreError> {
        let row = sqlx::query_as::<_, (String, Option<String>, Option<String>)>(&self.select_sql())
            .bind(short_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|(short_id, long_url, owner)| ShortUrlRecord::new(short_id, long_url, owner)))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
