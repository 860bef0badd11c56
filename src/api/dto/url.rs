//! DTOs for the create and resolve operations.
//!
//! Field names follow the wire contract (`shortURL`, `longURL`). Fields are
//! optional at the serde level so that a missing field surfaces as a
//! validation error rather than a deserialization failure.

use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::{AppError, INVALID_REQUEST_MESSAGE};

/// Request to register a short identifier.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUrlRequest {
    /// Caller-chosen identifier. Not checked beyond presence.
    #[serde(rename = "shortURL")]
    #[validate(required, length(min = 1))]
    pub short_url: Option<String>,

    /// Redirect target. Not checked beyond presence.
    #[serde(rename = "longURL")]
    #[validate(required, length(min = 1))]
    pub long_url: Option<String>,
}

impl CreateUrlRequest {
    /// Validates the request and returns `(short_url, long_url)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is missing or empty.
    pub fn into_parts(self) -> Result<(String, String), AppError> {
        self.validate()?;

        match (self.short_url, self.long_url) {
            (Some(short_url), Some(long_url)) => Ok((short_url, long_url)),
            _ => Err(missing_fields()),
        }
    }
}

/// Request to resolve a short identifier.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveUrlRequest {
    #[serde(rename = "shortURL")]
    #[validate(required, length(min = 1))]
    pub short_url: Option<String>,
}

impl ResolveUrlRequest {
    /// Validates the request and returns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `shortURL` is missing or empty.
    pub fn into_short_url(self) -> Result<String, AppError> {
        self.validate()?;
        self.short_url.ok_or_else(missing_fields)
    }
}

fn missing_fields() -> AppError {
    AppError::bad_request(INVALID_REQUEST_MESSAGE, json!({}))
}
