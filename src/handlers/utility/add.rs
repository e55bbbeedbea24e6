//! `add` command handler.
//!
//! `add 2 3 4` replies with the sum of its arguments. Each argument is parsed
//! as a base-10 32-bit signed integer; tokens that fail to parse (not a
//! number, or out of range) are skipped. No arguments sums to 0.

use crate::handlers::{Context, Handler, HandlerResult};
use async_trait::async_trait;
use cmdsrv_proto::Response;

/// Handler for the `add` command.
pub struct AddHandler;

/// Sum the integer arguments, skipping anything that is not an `i32`.
pub fn sum_args(args: &[&str]) -> i64 {
    args.iter()
        .filter_map(|arg| arg.parse::<i32>().ok())
        .map(i64::from)
        .sum()
}

#[async_trait]
impl Handler for AddHandler {
    async fn handle(&self, ctx: &mut Context<'_>, tokens: &[&str]) -> HandlerResult {
        let total = sum_args(tokens.get(1..).unwrap_or_default());
        ctx.send(Response::Value(total.to_string())).await
    }
}
