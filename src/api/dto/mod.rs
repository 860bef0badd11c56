//! Data Transfer Objects for requests and responses.
//!
//! Requests are deserialized with Serde and checked with validator.

pub mod health;
pub mod url;
