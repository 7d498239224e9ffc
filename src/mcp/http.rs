//! Streamable HTTP transport.
//!
//! Mounts rmcp's [`StreamableHttpService`] at `/mcp` inside an axum router,
//! next to a plain `/health` probe. Every HTTP session gets its own
//! [`NotesServer`] over the one shared [`AppState`], so all sessions see the
//! same notes.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, NotesServer};
use crate::{AppError, Result};

/// Handler for `GET /health`; returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Build the axum router serving MCP on `/mcp` and the health probe.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(NotesServer::new(Arc::clone(&state))),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .nest_service("/mcp", service)
        .route("/health", get(health))
}

/// Serve MCP over Streamable HTTP on `config.bind_address:config.http_port`
/// until the cancellation token fires.
///
/// # Errors
///
/// Returns `AppError::Config` for an invalid bind address and
/// `AppError::Transport` if binding or serving fails.
pub async fn serve_http(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let addr = state.config.http_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::Transport(format!("failed to bind {addr}: {err}")))?;

    info!(%addr, "starting streamable HTTP MCP transport");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { ct.cancelled_owned().await })
        .await
        .map_err(|err| AppError::Transport(format!("http transport failed: {err}")))?;

    info!("streamable HTTP MCP transport shut down");
    Ok(())
}
