//! Stdio transport setup for the primary client connection.
//!
//! Wires [`NotesServer`] to stdin/stdout for direct invocation by MCP hosts
//! such as desktop assistants and agentic IDEs.

use std::sync::Arc;

use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, NotesServer};
use crate::{AppError, Result};

/// Serve the MCP server over stdio until the client disconnects or the
/// cancellation token fires.
///
/// # Errors
///
/// Returns `AppError::Transport` if the transport fails to initialize or the
/// service terminates abnormally.
pub async fn serve_stdio(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let server = NotesServer::new(state);
    let transport = stdio();

    info!("starting stdio MCP transport");
    let service = server
        .serve_with_ct(transport, ct)
        .await
        .map_err(|err| AppError::Transport(format!("stdio transport failed: {err}")))?;

    service
        .waiting()
        .await
        .map_err(|err| AppError::Transport(format!("stdio service error: {err}")))?;

    info!("stdio MCP transport shut down");
    Ok(())
}
