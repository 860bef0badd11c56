//! Handler for short URL registration.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::url::CreateUrlRequest;
use crate::error::{AppError, INVALID_REQUEST_MESSAGE};
use crate::state::AppState;

/// Plain-text body returned on successful creation.
pub const CREATED_MESSAGE: &str = "Successfully created shortURL";

/// Stores a short identifier → destination mapping.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "shortURL": "abc", "longURL": "https://example.com" }
/// ```
///
/// An existing mapping for the same identifier is overwritten.
///
/// # Response
///
/// `200 OK` with body `Successfully created shortURL`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or a field is missing.
/// Returns 500 Internal Server Error if the store write fails.
pub async fn create_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(reject_body)?;
    let (short_url, long_url) = request.into_parts()?;

    state.url_service.create(short_url, long_url).await?;

    Ok((StatusCode::OK, CREATED_MESSAGE))
}

/// Maps axum's body extraction failures onto the validation error.
pub(crate) fn reject_body(rejection: JsonRejection) -> AppError {
    AppError::bad_request(
        INVALID_REQUEST_MESSAGE,
        json!({ "reason": rejection.body_text() }),
    )
}
