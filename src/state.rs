//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State shared by every request.
///
/// Holds the service and, through it, the long-lived store client.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
