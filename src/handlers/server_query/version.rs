//! `version` command handler.
//!
//! Reports the server's `major.minor` version in the active dialect.

use crate::handlers::{Context, Handler, HandlerResult};
use async_trait::async_trait;
use cmdsrv_proto::Response;

/// Handler for the `version` command.
pub struct VersionHandler;

#[async_trait]
impl Handler for VersionHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _tokens: &[&str]) -> HandlerResult {
        let version = ctx.server.version();
        ctx.send(Response::Version {
            major: version.major,
            minor: version.minor,
        })
        .await
    }
}
