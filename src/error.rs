//! Application error type and its HTTP / invocation representation.
//!
//! Client-facing bodies are `{"error": <message>}`, plus `details` for
//! validation failures. Store failures never expose backend detail; it is
//! logged where the failure happens.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// Body returned by Resolve for unknown identifiers.
pub const NOT_FOUND_MESSAGE: &str = "Short URL not found";

/// Body returned for any store failure.
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Body returned for requests that fail validation.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the caller.
    pub fn body(&self) -> Value {
        match self {
            AppError::Validation { message, details } => {
                json!({ "error": message, "details": details })
            }
            AppError::NotFound { message } | AppError::Internal { message } => {
                json!({ "error": message })
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(_: StoreError) -> Self {
        AppError::internal(INTERNAL_MESSAGE)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        AppError::bad_request(INVALID_REQUEST_MESSAGE, json!({ "fields": fields }))
    }
}
