//! `exit` / `quit` handler for terminating client sessions.

use crate::handlers::{Context, Handler, HandlerError, HandlerResult};
use async_trait::async_trait;
use tracing::info;

/// Handler for the close command (`exit` in the plain dialect, `quit` in the framed one).
///
/// Writes nothing; the connection loop closes the socket.
pub struct QuitHandler;

#[async_trait]
impl Handler for QuitHandler {
    async fn handle(&self, ctx: &mut Context<'_>, tokens: &[&str]) -> HandlerResult {
        let command = tokens.first().copied().unwrap_or_default();
        info!(remote_addr = %ctx.remote_addr, command, "Client quit");

        // Signal quit by returning Quit error that connection loop will handle
        Err(HandlerError::Quit)
    }
}
