//! `echo` command handler.
//!
//! `echo a b c` sends each argument back as its own line.

use crate::handlers::{Context, Handler, HandlerResult};
use async_trait::async_trait;
use cmdsrv_proto::Response;

/// Handler for the `echo` command.
pub struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, ctx: &mut Context<'_>, tokens: &[&str]) -> HandlerResult {
        ctx.send(Response::Lines(tokens.get(1..).unwrap_or_default())).await
    }
}
