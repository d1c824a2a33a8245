//! Admin HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and runs the Axum
//! server until `Ctrl-C` is received.

use std::sync::Arc;

use nibog_core::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Start the admin HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until `Ctrl-C`. Returns `Ok(())` on clean shutdown.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener = bind_listener(config).await?;
    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Admin server stopped");
    Ok(())
}

/// Bind the listener, resolving host names such as `localhost`.
async fn bind_listener(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| {
            ServerError::Bind(format!("bind failed on {}:{}: {e}", config.host, config.port))
        })?;

    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address: {e}")))?;
    info!(%addr, "Admin server listening");
    Ok(listener)
}

/// Resolve once `Ctrl-C` arrives.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

/// Errors that can occur when starting or running the admin server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nibog_core::config::LatencyConfig;
    use nibog_core::seed_catalog;

    #[tokio::test]
    async fn invalid_host_is_a_bind_error() {
        let config = ServerConfig {
            host: String::from("not a host"),
            port: 8080,
        };
        let state =
            Arc::new(AppState::new(seed_catalog().unwrap(), LatencyConfig::instant()).unwrap());
        let result = start_server(&config, state).await;
        assert!(matches!(result, Err(ServerError::Bind(_))));
    }

    #[tokio::test]
    async fn binds_by_host_name() {
        let config = ServerConfig {
            host: String::from("localhost"),
            port: 0,
        };
        let listener = bind_listener(&config).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn binds_bare_ipv4_address() {
        let config = ServerConfig {
            host: String::from("127.0.0.1"),
            port: 0,
        };
        let listener = bind_listener(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
