//! API layer for request/response handling.
//!
//! Translates HTTP requests and function invocations into service calls and
//! formats responses according to the operation contracts.
//!
//! # Modules
//!
//! - [`dto`] - Request/response types
//! - [`handlers`] - Axum request handlers
//! - [`invocation`] - Payload contract for serverless function front doors
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod invocation;
pub mod middleware;
pub mod routes;
