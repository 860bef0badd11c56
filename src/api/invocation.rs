//! Function-invocation contract for the create and resolve operations.
//!
//! Serverless front doors hand the handler a loosely structured JSON payload
//! and expect a `{ statusCode, headers?, body? }` object back, with JSON
//! bodies encoded as strings. These functions never fail: every outcome,
//! including a malformed payload, is expressed as a response.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use tokio::sync::OnceCell;

use crate::api::dto::url::{CreateUrlRequest, ResolveUrlRequest};
use crate::api::handlers::create::CREATED_MESSAGE;
use crate::application::services::UrlService;
use crate::error::{AppError, INTERNAL_MESSAGE, INVALID_REQUEST_MESSAGE};

/// Response object returned to the function runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl InvocationResponse {
    fn text(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: None,
            body: Some(body.into()),
        }
    }

    fn redirect(location: String) -> Self {
        Self {
            status_code: 302,
            headers: Some(BTreeMap::from([("Location".to_string(), location)])),
            body: None,
        }
    }

    /// Returns the `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get("Location"))
            .map(String::as_str)
    }
}

impl From<AppError> for InvocationResponse {
    fn from(err: AppError) -> Self {
        Self::text(err.status_code().as_u16(), err.body().to_string())
    }
}

/// Operation served by a function front door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Resolve,
}

impl Operation {
    async fn invoke(self, service: &UrlService, payload: Value) -> InvocationResponse {
        match self {
            Operation::Create => create(service, payload).await,
            Operation::Resolve => resolve(service, payload).await,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Resolve => write!(f, "resolve"),
        }
    }
}

/// Entry point shared by the function binaries.
///
/// The service in `cell` is built by `setup` on first use. A failed setup is
/// logged and answered with a 500, and the cell stays empty so the next
/// invocation tries again.
pub async fn handle<F, Fut>(
    cell: &OnceCell<UrlService>,
    setup: F,
    operation: Operation,
    payload: Value,
) -> InvocationResponse
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<UrlService>>,
{
    tracing::info!(%operation, %payload, "Function input");

    match cell.get_or_try_init(setup).await {
        Ok(service) => operation.invoke(service, payload).await,
        Err(error) => {
            tracing::error!(%operation, "Failed to initialize store: {error:#}");
            AppError::internal(INTERNAL_MESSAGE).into()
        }
    }
}

/// Handles a create invocation: `{ shortURL, longURL }`.
pub async fn create(service: &UrlService, payload: Value) -> InvocationResponse {
    match try_create(service, payload).await {
        Ok(()) => InvocationResponse::text(200, CREATED_MESSAGE),
        Err(err) => err.into(),
    }
}

/// Handles a resolve invocation: `{ shortURL }`.
pub async fn resolve(service: &UrlService, payload: Value) -> InvocationResponse {
    match try_resolve(service, payload).await {
        Ok(long_url) => InvocationResponse::redirect(long_url),
        Err(err) => err.into(),
    }
}

async fn try_create(service: &UrlService, payload: Value) -> Result<(), AppError> {
    let (short_url, long_url) = parse::<CreateUrlRequest>(payload)?.into_parts()?;
    service.create(short_url, long_url).await
}

async fn try_resolve(service: &UrlService, payload: Value) -> Result<String, AppError> {
    let short_url = parse::<ResolveUrlRequest>(payload)?.into_short_url()?;
    service.resolve(&short_url).await
}

fn parse<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload).map_err(|e| {
        AppError::bad_request(INVALID_REQUEST_MESSAGE, json!({ "reason": e.to_string() }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShortUrlRecord;
    use crate::domain::repositories::{MockUrlRepository, StoreError};
    use crate::infrastructure::persistence::MemoryUrlRepository;
    use std::sync::Arc;
    use std::time::Duration;

    fn memory_service() -> (UrlService, Arc<MemoryUrlRepository>) {
        let repository = Arc::new(MemoryUrlRepository::new());
        let service = UrlService::new(repository.clone(), "owner", Duration::from_secs(5));
        (service, repository)
    }

    fn failing_service() -> UrlService {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_put()
            .returning(|_| Err(StoreError::Unavailable("connection reset".to_string())));
        mock_repo
            .expect_get()
            .returning(|_| Err(StoreError::Unavailable("connection reset".to_string())));
        UrlService::new(Arc::new(mock_repo), "owner", Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_create_then_resolve() {
        let (service, _) = memory_service();

        let created = create(
            &service,
            json!({ "shortURL": "abc", "longURL": "https://example.com" }),
        )
        .await;
        assert_eq!(created.status_code, 200);
        assert_eq!(created.body.as_deref(), Some("Successfully created shortURL"));

        let resolved = resolve(&service, json!({ "shortURL": "abc" })).await;
        assert_eq!(resolved.status_code, 302);
        assert_eq!(resolved.location(), Some("https://example.com"));
        assert!(resolved.body.is_none());

        let missing = resolve(&service, json!({ "shortURL": "xyz" })).await;
        assert_eq!(missing.status_code, 404);
        assert_eq!(
            missing.body.as_deref(),
            Some(r#"{"error":"Short URL not found"}"#)
        );
    }

    #[tokio::test]
    async fn test_record_without_destination() {
        let (service, repository) = memory_service();
        repository
            .insert_raw(ShortUrlRecord::new(
                "bare".to_string(),
                None,
                Some("owner".to_string()),
            ))
            .await;

        let resolved = resolve(&service, json!({ "shortURL": "bare" })).await;
        assert_eq!(resolved.status_code, 404);
    }

    #[tokio::test]
    async fn test_store_failures() {
        let service = failing_service();

        let created = create(
            &service,
            json!({ "shortURL": "abc", "longURL": "https://example.com" }),
        )
        .await;
        assert_eq!(created.status_code, 500);
        assert_eq!(
            created.body.as_deref(),
            Some(r#"{"error":"Internal Server Error"}"#)
        );

        let resolved = resolve(&service, json!({ "shortURL": "abc" })).await;
        assert_eq!(resolved.status_code, 500);
        assert_eq!(
            resolved.body.as_deref(),
            Some(r#"{"error":"Internal Server Error"}"#)
        );
    }

    #[tokio::test]
    async fn test_malformed_payloads() {
        let (service, repository) = memory_service();

        let created = create(&service, json!({ "shortURL": "abc" })).await;
        assert_eq!(created.status_code, 400);

        let created = create(&service, json!("abc")).await;
        assert_eq!(created.status_code, 400);

        let resolved = resolve(&service, json!({ "longURL": "https://example.com" })).await;
        assert_eq!(resolved.status_code, 400);

        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_handle_setup_failure_answers_500_and_retries() {
        let cell = OnceCell::new();

        let response = handle(
            &cell,
            || async { Err(anyhow::anyhow!("Connection refused (os error 111)")) },
            Operation::Resolve,
            json!({ "shortURL": "abc" }),
        )
        .await;
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body.as_deref(),
            Some(r#"{"error":"Internal Server Error"}"#)
        );
        assert!(!cell.initialized());

        let created = handle(
            &cell,
            || async { Ok(memory_service().0) },
            Operation::Create,
            json!({ "shortURL": "abc", "longURL": "https://example.com" }),
        )
        .await;
        assert_eq!(created.status_code, 200);
        assert!(cell.initialized());

        let resolved = handle(
            &cell,
            || async { Err(anyhow::anyhow!("setup must not run twice")) },
            Operation::Resolve,
            json!({ "shortURL": "abc" }),
        )
        .await;
        assert_eq!(resolved.status_code, 302);
        assert_eq!(resolved.location(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_handle_store_failure_during_call() {
        let cell = OnceCell::new();

        let created = handle(
            &cell,
            || async { Ok(failing_service()) },
            Operation::Create,
            json!({ "shortURL": "abc", "longURL": "https://example.com" }),
        )
        .await;
        assert_eq!(created.status_code, 500);

        let resolved = handle(
            &cell,
            || async { Ok(failing_service()) },
            Operation::Resolve,
            json!({ "shortURL": "abc" }),
        )
        .await;
        assert_eq!(resolved.status_code, 500);
        assert_eq!(
            resolved.body.as_deref(),
            Some(r#"{"error":"Internal Server Error"}"#)
        );
    }

    #[test]
    fn test_response_serialization() {
        let redirect = InvocationResponse::redirect("https://example.com".to_string());
        assert_eq!(
            serde_json::to_value(&redirect).unwrap(),
            json!({ "statusCode": 302, "headers": { "Location": "https://example.com" } })
        );

        let created = InvocationResponse::text(200, CREATED_MESSAGE);
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({ "statusCode": 200, "body": "Successfully created shortURL" })
        );
    }
}
