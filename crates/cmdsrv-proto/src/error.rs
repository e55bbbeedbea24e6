//! Error types for the cmdsrv protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while decoding server replies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Reply text was not valid UTF-8.
    #[error("invalid utf-8 in reply: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A framed reply did not follow the `OK <len>\r\n---\r\n...\r\n\r\n` layout.
    #[error("invalid envelope: {reason}")]
    InvalidEnvelope {
        /// What was wrong with the envelope.
        reason: String,
    },

    /// The declared envelope length disagrees with the body layout.
    #[error("envelope length mismatch: declared {declared}, body is {actual}")]
    LengthMismatch {
        /// Length announced in the `OK` header.
        declared: usize,
        /// Length the body actually needs.
        actual: usize,
    },
}

impl ProtocolError {
    pub(crate) fn envelope(reason: impl Into<String>) -> Self {
        Self::InvalidEnvelope {
            reason: reason.into(),
        }
    }
}
