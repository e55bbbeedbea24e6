//! Client-side reply decoding for tokio.
//!
//! [`ReplyCodec`] turns the byte stream a server writes back into discrete
//! [`Reply`] values, so clients (and tests) can check that what the server
//! encoded in its dialect round-trips.

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

use crate::dialect::{
    Dialect, FRAMED_BODY_PREFIX, FRAMED_BODY_SUFFIX, FRAMED_ITEM_SEPARATOR, UNKNOWN_COMMAND_REPLY,
};
use crate::error::{self, ProtocolError};

/// Longest `OK <len>\r\n` header accepted before giving up on finding the CRLF.
const MAX_HEADER_LEN: usize = 32;

const OK_TAG: &str = "OK ";

/// A decoded server reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// One newline-terminated line (plain dialect), terminator stripped.
    Line(String),
    /// Payload of an `OK` envelope (framed dialect).
    Ok(String),
    /// Unknown-command notice (framed dialect).
    UnknownCommand,
}

impl Reply {
    /// Split the reply into its items.
    ///
    /// A plain line is a single item; a framed payload holds CRLF-separated items.
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Line(line) => vec![line.as_str()],
            Self::Ok(payload) if payload.is_empty() => Vec::new(),
            Self::Ok(payload) => payload.split(FRAMED_ITEM_SEPARATOR).collect(),
            Self::UnknownCommand => Vec::new(),
        }
    }
}

/// Decoder for server replies in a given dialect.
#[derive(Debug, Clone, Copy)]
pub struct ReplyCodec {
    dialect: Dialect,
}

impl ReplyCodec {
    /// Create a decoder for replies in `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    fn decode_plain(src: &mut BytesMut) -> error::Result<Option<Reply>> {
        let Some(pos) = src.iter().position(|b| *b == b'\n') else {
            return Ok(None);
        };
        let line = src.split_to(pos + 1);
        let text = String::from_utf8(line[..pos].to_vec())?;
        Ok(Some(Reply::Line(text)))
    }

    fn decode_framed(src: &mut BytesMut) -> error::Result<Option<Reply>> {
        if src.starts_with(UNKNOWN_COMMAND_REPLY.as_bytes()) {
            src.advance(UNKNOWN_COMMAND_REPLY.len());
            return Ok(Some(Reply::UnknownCommand));
        }
        if is_partial(src, UNKNOWN_COMMAND_REPLY) || is_partial(src, OK_TAG) {
            return Ok(None);
        }
        if !src.starts_with(OK_TAG.as_bytes()) {
            return Err(ProtocolError::envelope("reply starts with neither OK nor UNKNOWN_COMMAND"));
        }

        let Some(crlf) = find(src, b"\r\n") else {
            if src.len() > MAX_HEADER_LEN {
                return Err(ProtocolError::envelope("header line too long"));
            }
            return Ok(None);
        };
        let declared: usize = std::str::from_utf8(&src[OK_TAG.len()..crlf])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| ProtocolError::envelope("length is not a decimal number"))?;
        let header_len = crlf + 2;

        let min_body = FRAMED_BODY_PREFIX.len() + FRAMED_BODY_SUFFIX.len();
        if declared < min_body {
            return Err(ProtocolError::LengthMismatch {
                declared,
                actual: min_body,
            });
        }
        if src.len() < header_len + declared {
            src.reserve(header_len + declared - src.len());
            return Ok(None);
        }

        let body = &src[header_len..header_len + declared];
        if !body.starts_with(FRAMED_BODY_PREFIX.as_bytes()) {
            return Err(ProtocolError::envelope("body does not open with ---"));
        }
        if !body.ends_with(FRAMED_BODY_SUFFIX.as_bytes()) {
            let after_prefix = header_len + FRAMED_BODY_PREFIX.len();
            return Err(match find(&src[after_prefix..], FRAMED_BODY_SUFFIX.as_bytes()) {
                Some(pos) => ProtocolError::LengthMismatch {
                    declared,
                    actual: FRAMED_BODY_PREFIX.len() + pos + FRAMED_BODY_SUFFIX.len(),
                },
                None => ProtocolError::envelope("body is not terminated by a blank line"),
            });
        }

        let payload =
            body[FRAMED_BODY_PREFIX.len()..declared - FRAMED_BODY_SUFFIX.len()].to_vec();
        src.advance(header_len + declared);
        Ok(Some(Reply::Ok(String::from_utf8(payload)?)))
    }
}

impl Decoder for ReplyCodec {
    type Item = Reply;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<Reply>> {
        if src.is_empty() {
            return Ok(None);
        }
        match self.dialect {
            Dialect::Plain => Self::decode_plain(src),
            Dialect::Framed => Self::decode_framed(src),
        }
    }
}

fn is_partial(src: &[u8], literal: &str) -> bool {
    src.len() < literal.len() && literal.as_bytes().starts_with(src)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
