//! cmdsrv - a line-oriented TCP command server.
//!
//! Clients send whitespace-delimited tokens; the first token names a command
//! that is looked up in a registry of handlers. Two response dialects are
//! available (plain text and `OK <len>` framed envelopes), chosen per server.
//!
//! ```no_run
//! use cmdsrv::Server;
//! use cmdsrv::handlers::{AddHandler, EchoHandler};
//!
//! # async fn run() {
//! let mut server = Server::new(1, 0);
//! server.handle("echo", EchoHandler).handle("add", AddHandler);
//! server.listen_and_serve("127.0.0.1:1201").await;
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod network;
pub mod server;

pub use config::Config;
pub use error::{HandlerError, HandlerResult, ListenError};
pub use handlers::{Context, Handler, Registry};
pub use network::Gateway;
pub use server::{Server, Version};
