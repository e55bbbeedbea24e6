//! Shared handler helpers.

use super::core::{Context, HandlerResult};
use cmdsrv_proto::Response;

/// Answer a command name that has no registered handler.
///
/// Writes the dialect's unknown-command notice and leaves the connection open.
pub async fn unknown_command(ctx: &mut Context<'_>, name: &str) -> HandlerResult {
    ctx.send(Response::UnknownCommand(name)).await
}
