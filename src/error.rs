//! Unified error handling for cmdsrv.
//!
//! Three kinds of failure exist: startup errors while binding the listener,
//! per-connection I/O errors, and routine protocol outcomes. Only the first
//! two are represented here; unknown commands or non-numeric arguments are
//! answered on the wire and never become errors.

use std::io;
use std::net::SocketAddr;
use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Writing the response failed; the current command is abandoned.
    #[error("send error: {0}")]
    Send(#[from] io::Error),

    /// The handler asked for the connection to be closed.
    #[error("connection closed by command")]
    Quit,
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Send(_) => "send_error",
            Self::Quit => "quit",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Listener Errors (startup)
// ============================================================================

/// Fatal errors raised while setting up the listener.
#[derive(Debug, Error)]
pub enum ListenError {
    #[error("failed to resolve {address}: {source}")]
    Resolve {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("{0} has no IPv4 address")]
    NoIpv4Address(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}
