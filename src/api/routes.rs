//! Route configuration for the create and resolve operations.

use crate::api::handlers::{
    create_url_handler, health_handler, redirect_handler, resolve_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes.
///
/// # Endpoints
///
/// - `POST /urls`          - Create or overwrite a short URL
/// - `POST /resolve`       - Resolve a short URL given in a JSON body
/// - `GET  /health`        - Store health check
/// - `GET  /{short_url}`   - Redirect to the stored destination
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_url_handler))
        .route("/resolve", post(resolve_handler))
        .route("/health", get(health_handler))
        .route("/{short_url}", get(redirect_handler))
}
