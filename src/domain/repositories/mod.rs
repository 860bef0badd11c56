//! Repository trait definitions for the domain layer.
//!
//! [`UrlRepository`] abstracts the key-value store holding short URL records.
//! Concrete backends live in `crate::infrastructure::persistence`; a mock is
//! generated via `mockall` for unit tests.

pub mod url_repository;

pub use url_repository::{StoreError, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
