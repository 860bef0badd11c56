//! Redis implementation of the record store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::collections::HashMap;
use tracing::info;

use crate::domain::entities::{NewShortUrlRecord, ShortUrlRecord};
use crate::domain::repositories::{StoreError, UrlRepository};

const LONG_URL_FIELD: &str = "longURL";
const OWNER_FIELD: &str = "owner";

/// Redis repository storing each record as a hash under `<namespace>:<shortId>`.
///
/// A put deletes the old hash and writes the new one in one `MULTI`/`EXEC`
/// block, so it replaces the whole record and concurrent writers to one key
/// resolve as last write wins.
pub struct RedisUrlRepository {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisUrlRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the URL is invalid, the connection cannot be
    /// established, or the PING fails.
    pub async fn connect(redis_url: &str, namespace: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: format!("{namespace}:"),
        })
    }

    fn build_key(&self, short_id: &str) -> String {
        format!("{}{}", self.key_prefix, short_id)
    }
}

#[async_trait]
impl UrlRepository for RedisUrlRepository {
    async fn put(&self, record: NewShortUrlRecord) -> Result<(), StoreError> {
        let key = self.build_key(&record.short_id);
        let mut conn = self.client.clone();

        replace_pipeline(&key, &record)
            .query_async::<()>(&mut conn)
            .await?;

        Ok(())
    }

    async fn get(&self, short_id: &str) -> Result<Option<ShortUrlRecord>, StoreError> {
        let key = self.build_key(short_id);
        let mut conn = self.client.clone();

        let mut fields = conn.hgetall::<_, HashMap<String, String>>(&key).await?;

        Ok(record_from_fields(short_id, &mut fields))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

fn replace_pipeline(key: &str, record: &NewShortUrlRecord) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic()
        .del(key)
        .ignore()
        .hset_multiple(
            key,
            &[
                (LONG_URL_FIELD, record.long_url.as_str()),
                (OWNER_FIELD, record.owner.as_str()),
            ],
        )
        .ignore();
    pipe
}

/// `HGETALL` answers an empty map for absent keys.
fn record_from_fields(
    short_id: &str,
    fields: &mut HashMap<String, String>,
) -> Option<ShortUrlRecord> {
    if fields.is_empty() {
        return None;
    }

    Some(ShortUrlRecord::new(
        short_id.to_string(),
        fields.remove(LONG_URL_FIELD),
        fields.remove(OWNER_FIELD),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_replaces_whole_hash() {
        let record = NewShortUrlRecord {
            short_id: "abc".to_string(),
            long_url: "https://example.com".to_string(),
            owner: "owner".to_string(),
        };

        let packed = replace_pipeline("url_shortener:abc", &record).get_packed_pipeline();
        let packed = String::from_utf8_lossy(&packed);

        let multi = packed.find("MULTI").unwrap();
        let del = packed.find("DEL").unwrap();
        let write = packed.find("longURL").unwrap();
        let exec = packed.find("EXEC").unwrap();
        assert!(multi < del && del < write && write < exec);
        assert!(packed.contains("url_shortener:abc"));
    }

    #[test]
    fn test_empty_hash_is_absent() {
        assert!(record_from_fields("abc", &mut HashMap::new()).is_none());
    }

    #[test]
    fn test_hash_without_destination() {
        let mut fields = HashMap::from([(OWNER_FIELD.to_string(), "owner".to_string())]);

        let record = record_from_fields("abc", &mut fields).unwrap();
        assert!(record.destination().is_none());
        assert_eq!(record.owner.as_deref(), Some("owner"));
    }

    #[test]
    fn test_full_hash() {
        let mut fields = HashMap::from([
            (LONG_URL_FIELD.to_string(), "https://example.com".to_string()),
            (OWNER_FIELD.to_string(), "owner".to_string()),
        ]);

        let record = record_from_fields("abc", &mut fields).unwrap();
        assert_eq!(record.short_id, "abc");
        assert_eq!(record.destination(), Some("https://example.com"));
    }
}
