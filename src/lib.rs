//! # KV URL Shortener
//!
//! A URL shortening service over a key-value record store, with two
//! operations:
//!
//! - **Create** - store a caller-chosen short identifier and its destination
//! - **Resolve** - answer a short identifier with a `302 Found` redirect
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Record types and the store trait
//! - **Application Layer** ([`application`]) - Create / resolve use cases
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL, Redis and in-memory stores
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and the function-invocation contract
//!
//! ## Front doors
//!
//! - `kv-url-shortener` - Axum HTTP server ([`server::run`])
//! - `create_lambda` / `resolve_lambda` - AWS Lambda functions ([`api::invocation`])
//! - `admin` - CLI for inspecting and writing records
//!
//! ## Quick Start
//!
//! ```bash
//! export STORE_BACKEND="redis"
//! export REDIS_URL="redis://localhost:6379"
//!
//! cargo run
//! curl -X POST localhost:3000/urls -H 'content-type: application/json' \
//!     -d '{"shortURL":"abc","longURL":"https://example.com"}'
//! curl -i localhost:3000/abc
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewShortUrlRecord, ShortUrlRecord};
    pub use crate::domain::repositories::{StoreError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
