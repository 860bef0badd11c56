//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - Record store backends (PostgreSQL, Redis, in-memory)

pub mod persistence;
