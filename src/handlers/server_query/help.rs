//! `command-list` / `help` command handler.
//!
//! Lists every registered command name, sorted, once each.

use crate::handlers::{Context, Handler, HandlerResult};
use async_trait::async_trait;
use cmdsrv_proto::Response;

/// Handler for the command listing (`command-list` or `help`, by dialect).
pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _tokens: &[&str]) -> HandlerResult {
        let server = ctx.server;
        let names = server.registry().names();
        ctx.send(Response::CommandList(&names)).await
    }
}
