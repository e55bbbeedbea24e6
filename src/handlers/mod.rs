//! Command handlers.
//!
//! Built-in commands are registered by [`Registry::with_builtins`]; the
//! utility commands (`echo`, `add`) are registered by the binary entry point.

mod connection;
pub mod core;
mod helpers;
mod server_query;
mod utility;

pub use self::connection::QuitHandler;
pub use self::core::{Context, Handler, HandlerError, HandlerResult, Registry, Sink};
pub use self::helpers::unknown_command;
pub use self::server_query::{HelpHandler, VersionHandler};
pub use self::utility::{AddHandler, EchoHandler};
