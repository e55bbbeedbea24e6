//! Classification of why a connection loop ended.

use std::fmt;
use std::io;

/// Reason a connection loop terminated.
#[derive(Debug)]
pub(super) enum CloseReason {
    /// The client closed its side (read returned zero bytes).
    PeerClosed,
    /// A handler asked for the connection to close.
    Quit,
    /// The connection was reset or torn down by the peer mid-read.
    Reset(io::Error),
    /// Any other read failure.
    ReadError(io::Error),
}

/// Classify a read error. Every read error ends the connection; this only
/// decides how loudly it is logged.
pub(super) fn classify_read_error(e: io::Error) -> CloseReason {
    match e.kind() {
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe
        | io::ErrorKind::UnexpectedEof => CloseReason::Reset(e),
        _ => CloseReason::ReadError(e),
    }
}

impl CloseReason {
    /// Whether this is an unexpected failure worth a warning.
    pub(super) fn is_error(&self) -> bool {
        matches!(self, Self::ReadError(_))
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeerClosed => f.write_str("peer closed"),
            Self::Quit => f.write_str("quit"),
            Self::Reset(e) => write!(f, "reset: {e}"),
            Self::ReadError(e) => write!(f, "read error: {e}"),
        }
    }
}
