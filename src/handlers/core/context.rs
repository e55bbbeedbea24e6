//! Command handler context and core types.
//!
//! Defines the `Context` passed to every handler and the `Handler` trait
//! itself. A handler receives the shared server, exclusive access to the
//! write side of its connection, and the full token list of the command
//! (command name at index 0).

use crate::server::Server;
use async_trait::async_trait;
use bytes::BytesMut;
use cmdsrv_proto::{Dialect, Response};
use std::net::SocketAddr;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub use crate::error::{HandlerError, HandlerResult};

/// Write side of a connection as seen by handlers.
pub type Sink = dyn AsyncWrite + Send + Unpin;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// Shared server state (version, dialect, registry).
    pub server: &'a Server,
    /// Where responses are written. Owned exclusively by this connection.
    pub sink: &'a mut Sink,
    /// Remote address of the client.
    pub remote_addr: SocketAddr,
}

impl<'a> Context<'a> {
    /// Create a new context.
    pub fn new(server: &'a Server, sink: &'a mut Sink, remote_addr: SocketAddr) -> Self {
        Self {
            server,
            sink,
            remote_addr,
        }
    }

    /// Dialect responses must be encoded in.
    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.server.dialect()
    }

    /// Encode a response in the server's dialect and write it out.
    pub async fn send(&mut self, response: Response<'_>) -> HandlerResult {
        let mut buf = BytesMut::new();
        self.dialect().encode(&response, &mut buf);
        self.write(&buf).await
    }

    /// Write raw bytes to the connection.
    pub async fn write(&mut self, bytes: &[u8]) -> HandlerResult {
        self.sink.write_all(bytes).await?;
        self.sink.flush().await?;
        Ok(())
    }
}

/// A command handler.
///
/// Handlers own no per-connection state; the same instance serves every
/// connection concurrently.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one command invocation.
    ///
    /// `tokens[0]` is the command name; the rest are its arguments.
    /// Returning [`HandlerError::Quit`] closes the connection.
    async fn handle(&self, ctx: &mut Context<'_>, tokens: &[&str]) -> HandlerResult;
}
