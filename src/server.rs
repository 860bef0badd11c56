//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and the Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::{Config, StoreBackend};
use crate::infrastructure::persistence::connect_repository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects the configured store and wraps it in a [`UrlService`].
///
/// # Errors
///
/// Returns an error if the store connection cannot be established.
pub async fn build_url_service(config: &Config) -> Result<UrlService> {
    let repository = connect_repository(config).await?;
    tracing::info!("Store ready ({})", config.store_backend);

    Ok(UrlService::new(
        repository,
        config.record_owner.clone(),
        config.store_timeout(),
    ))
}

/// Builds the service for a function front door.
///
/// Setup is bounded by the store timeout. The in-memory backend is refused:
/// create and resolve run as separate processes and would never share it.
///
/// # Errors
///
/// Returns an error if the backend is `memory`, or if the store cannot be
/// reached within `STORE_TIMEOUT_MS`.
pub async fn build_function_service(config: &Config) -> Result<UrlService> {
    if config.store_backend == StoreBackend::Memory {
        anyhow::bail!("STORE_BACKEND must be 'postgres' or 'redis' for function deployments");
    }

    tokio::time::timeout(config.store_timeout(), build_url_service(config))
        .await
        .with_context(|| {
            format!(
                "Store setup did not finish within {}ms",
                config.store_timeout_ms
            )
        })?
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let url_service = build_url_service(&config).await?;
    let state = AppState::new(Arc::new(url_service));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn function_config(store_backend: StoreBackend) -> Config {
        Config {
            store_backend,
            database_url: None,
            redis_url: None,
            store_table: "url_shortener".to_string(),
            store_timeout_ms: 200,
            record_owner: "owner".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 10,
            db_connect_timeout: 30,
        }
    }

    #[tokio::test]
    async fn test_function_service_refuses_memory_backend() {
        let err = build_function_service(&function_config(StoreBackend::Memory))
            .await
            .err()
            .unwrap();

        assert!(err.to_string().contains("STORE_BACKEND"));
    }

    #[tokio::test]
    async fn test_function_service_setup_is_bounded() {
        let mut config = function_config(StoreBackend::Redis);
        config.redis_url = Some("redis://127.0.0.1:1/0".to_string());

        let started = Instant::now();
        let result = build_function_service(&config).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
