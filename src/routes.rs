//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /urls`         - Create a short URL
//! - `POST /resolve`      - Resolve a short URL from a JSON body
//! - `GET  /health`       - Store health check
//! - `GET  /{short_url}`  - Redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing applied.
pub fn api_router(state: AppState) -> Router {
    api::routes::url_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
