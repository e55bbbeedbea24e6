//! Command handler registry and dispatch.
//!
//! The `Registry` maps case-sensitive command names to handlers. It is
//! populated before serving starts and then frozen: once the owning
//! [`Server`](crate::server::Server) is shared between connection tasks it is
//! only ever read, so lookups need no locking.

use super::context::{Context, Handler, HandlerResult};
use crate::handlers::{HelpHandler, QuitHandler, VersionHandler, unknown_command};
use cmdsrv_proto::{CommandLine, Dialect};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{Instrument, Level, debug, span};

/// Registry of command handlers.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in commands of `dialect`.
    pub fn with_builtins(dialect: Dialect) -> Self {
        let names = dialect.builtin_names();
        let mut registry = Self::new();
        registry.register(names.close, QuitHandler);
        registry.register(names.list, HelpHandler);
        registry.register(names.version, VersionHandler);
        registry
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register<H: Handler + 'static>(&mut self, name: impl Into<String>, handler: H) {
        self.register_shared(name, Arc::new(handler));
    }

    /// Register an already shared handler under `name`.
    pub fn register_shared(&mut self, name: impl Into<String>, handler: Arc<dyn Handler>) {
        let name = name.into();
        if self.handlers.insert(name.clone(), handler).is_some() {
            debug!(command = %name, "Replaced existing handler");
        }
    }

    /// Look up the handler for an exact, case-sensitive command name.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.handlers.get(name)
    }

    /// Whether a handler is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted lexicographically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch a command line to the matching handler.
    ///
    /// Unregistered names get the dialect's unknown-command notice and the
    /// connection stays open.
    pub async fn dispatch(&self, ctx: &mut Context<'_>, line: &CommandLine<'_>) -> HandlerResult {
        let cmd_name = line.name();

        let Some(handler) = self.lookup(cmd_name) else {
            debug!(command = %cmd_name, "Unknown command");
            return unknown_command(ctx, cmd_name).await;
        };

        let cmd_span = span!(
            Level::DEBUG,
            "command",
            command = %cmd_name,
            remote_addr = %ctx.remote_addr,
        );

        let result = handler.handle(ctx, line.tokens()).instrument(cmd_span).await;

        if let Err(ref e) = result {
            debug!(command = %cmd_name, error = %e, code = e.error_code(), "Command error");
        }

        result
    }
}
