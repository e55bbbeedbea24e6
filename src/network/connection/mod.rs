//! Connection - Handles an individual client connection.
//!
//! Each Connection runs in its own Tokio task and owns its stream exclusively:
//!
//! ```text
//!   read (<= 512 bytes) ──▶ tokenize ──▶ log ──▶ Registry::dispatch
//!        ▲                     │ empty                  │
//!        └─────────────────────┴────────────────────────┘
//!                        until EOF, read error or Quit
//! ```
//!
//! Each read is parsed on its own; nothing is buffered between reads. A write
//! failure abandons the current command only. The stream is shut down exactly
//! once, after the loop, whichever way it ended.

mod error_handling;

use error_handling::{CloseReason, classify_read_error};

use crate::handlers::{Context, HandlerError};
use crate::server::Server;
use cmdsrv_proto::{CommandLine, READ_BUFFER_SIZE, decode_read};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info, instrument, warn};

/// A client connection handler.
pub struct Connection<S = TcpStream> {
    addr: SocketAddr,
    stream: S,
    server: Arc<Server>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Send + Unpin + 'static,
{
    /// Create a connection handler for an accepted stream.
    pub fn new(stream: S, addr: SocketAddr, server: Arc<Server>) -> Self {
        Self {
            addr,
            stream,
            server,
        }
    }

    /// Run the read-tokenize-dispatch loop until the connection ends.
    #[instrument(skip(self), fields(addr = %self.addr), name = "connection")]
    pub async fn run(mut self) {
        debug!("Client connected");

        let mut buf = [0u8; READ_BUFFER_SIZE];
        let reason = loop {
            let n = match self.stream.read(&mut buf).await {
                Ok(0) => break CloseReason::PeerClosed,
                Ok(n) => n,
                Err(e) => break classify_read_error(e),
            };

            let text = decode_read(&buf[..n]);
            let Some(line) = CommandLine::parse(&text) else {
                continue;
            };

            info!(
                peer = %self.addr,
                command = line.name(),
                args = ?line.args(),
                "Command received"
            );

            let mut ctx = Context::new(&self.server, &mut self.stream, self.addr);
            match self.server.registry().dispatch(&mut ctx, &line).await {
                Ok(()) => {}
                Err(HandlerError::Quit) => break CloseReason::Quit,
                Err(e) => {
                    warn!(
                        command = line.name(),
                        error = %e,
                        code = e.error_code(),
                        "Failed to send response; command abandoned"
                    );
                }
            }
        };

        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "Shutdown after close failed");
        }

        if reason.is_error() {
            warn!(%reason, "Client disconnected");
        } else {
            info!(%reason, "Client disconnected");
        }
    }
}
