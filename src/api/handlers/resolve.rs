//! Handlers for short URL resolution.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::dto::url::ResolveUrlRequest;
use crate::api::handlers::create::reject_body;
use crate::error::{AppError, INTERNAL_MESSAGE};
use crate::state::AppState;

/// Redirects a short identifier to its destination.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored destination, no body.
///
/// # Errors
///
/// Returns 404 Not Found with `{"error": "Short URL not found"}` if the
/// identifier is unknown or its record has no destination.
/// Returns 500 Internal Server Error with `{"error": "Internal Server Error"}`
/// if the store lookup fails.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.url_service.resolve(&short_url).await?;
    found(long_url)
}

/// Resolves a short identifier given in a JSON body.
///
/// # Endpoint
///
/// `POST /resolve`
///
/// # Request Body
///
/// ```json
/// { "shortURL": "abc" }
/// ```
///
/// Responds exactly like [`redirect_handler`]; additionally returns 400 Bad
/// Request if `shortURL` is missing.
pub async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveUrlRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(reject_body)?;
    let short_url = request.into_short_url()?;

    let long_url = state.url_service.resolve(&short_url).await?;
    found(long_url)
}

/// Builds the `302 Found` response.
///
/// Destinations are stored verbatim, so one that is not a legal header value
/// is reported as a server-side failure.
fn found(long_url: String) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(long_url).map_err(|e| {
        error!(error = %e, "Stored destination is not a valid Location header");
        AppError::internal(INTERNAL_MESSAGE)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
