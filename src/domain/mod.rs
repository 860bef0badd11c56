//! Domain layer containing the record model and the store contract.
//!
//! - [`entities`] - Short URL record types
//! - [`repositories`] - Store trait and store error type
//!
//! The domain layer has no dependencies on the HTTP or function-runtime front
//! doors. Use cases are implemented in [`crate::application::services`].

pub mod entities;
pub mod repositories;
