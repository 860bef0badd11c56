//! HTTP request handlers.
//!
//! Each handler module corresponds to one operation.

pub mod create;
pub mod health;
pub mod resolve;

pub use create::create_url_handler;
pub use health::health_handler;
pub use resolve::{redirect_handler, resolve_handler};
