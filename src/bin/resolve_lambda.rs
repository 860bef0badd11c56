//! AWS Lambda function resolving short URLs to redirects.
//!
//! Payload: `{ "shortURL": "..." }`.
//! See [`kv_url_shortener::api::invocation::resolve`] for the response shapes.

use kv_url_shortener::api::invocation::{self, InvocationResponse, Operation};
use kv_url_shortener::application::services::UrlService;
use kv_url_shortener::{config, server, telemetry};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tokio::sync::OnceCell;

/// Store client shared by every invocation of this execution environment.
static SERVICE: OnceCell<UrlService> = OnceCell::const_new();

async fn setup() -> anyhow::Result<UrlService> {
    let config = config::load_from_env()?;
    config.print_summary();
    server::build_function_service(&config).await
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<InvocationResponse, Error> {
    Ok(invocation::handle(&SERVICE, setup, Operation::Resolve, event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    telemetry::init_tracing("info", &log_format);

    lambda_runtime::run(service_fn(handle_request)).await
}
