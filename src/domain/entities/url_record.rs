//! Short URL record mapping a caller-chosen identifier to its destination.

/// A record as read back from the store.
///
/// Everything except the key is optional: the store may hold records written
/// by other tools, and a record without a destination must resolve like a
/// missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlRecord {
    pub short_id: String,
    pub long_url: Option<String>,
    pub owner: Option<String>,
}

impl ShortUrlRecord {
    /// Creates a new ShortUrlRecord instance.
    pub fn new(short_id: String, long_url: Option<String>, owner: Option<String>) -> Self {
        Self {
            short_id,
            long_url,
            owner,
        }
    }

    /// Returns the redirect target, if the record has a non-empty one.
    ///
    /// An empty `longURL` counts as no destination, so such a record resolves
    /// as not found instead of redirecting to an empty `Location`.
    pub fn destination(&self) -> Option<&str> {
        self.long_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl From<NewShortUrlRecord> for ShortUrlRecord {
    fn from(record: NewShortUrlRecord) -> Self {
        Self {
            short_id: record.short_id,
            long_url: Some(record.long_url),
            owner: Some(record.owner),
        }
    }
}

/// Input data for writing a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrlRecord {
    pub short_id: String,
    pub long_url: String,
    pub owner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_present() {
        let record = ShortUrlRecord::new(
            "abc".to_string(),
            Some("https://example.com".to_string()),
            Some("owner".to_string()),
        );

        assert_eq!(record.destination(), Some("https://example.com"));
    }

    #[test]
    fn test_destination_missing_or_empty() {
        let missing = ShortUrlRecord::new("abc".to_string(), None, Some("owner".to_string()));
        assert!(missing.destination().is_none());

        let empty = ShortUrlRecord::new("abc".to_string(), Some(String::new()), None);
        assert!(empty.destination().is_none());
    }

    #[test]
    fn test_from_new_record() {
        let record: ShortUrlRecord = NewShortUrlRecord {
            short_id: "abc".to_string(),
            long_url: "https://example.com".to_string(),
            owner: "owner".to_string(),
        }
        .into();

        assert_eq!(record.short_id, "abc");
        assert_eq!(record.destination(), Some("https://example.com"));
        assert_eq!(record.owner.as_deref(), Some("owner"));
    }
}
