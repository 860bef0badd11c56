//! Core domain entities.
//!
//! The service persists a single entity, [`ShortUrlRecord`], keyed by the
//! caller-supplied short identifier. [`NewShortUrlRecord`] is the write model.

pub mod url_record;

pub use url_record::{NewShortUrlRecord, ShortUrlRecord};
