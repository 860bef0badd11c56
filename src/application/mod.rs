//! Application layer services implementing the use cases.
//!
//! - [`services::url_service::UrlService`] - Short URL creation and resolution

pub mod services;
