//! # cmdsrv-proto
//!
//! Wire-level building blocks for the cmdsrv line protocol.
//!
//! ## Features
//!
//! - Whitespace tokenizing of a single inbound read into a borrowed [`CommandLine`]
//! - Two response dialects: plain newline-terminated text and `OK <len>` framed envelopes
//! - Optional Tokio codec for decoding server replies on the client side
//!
//! ## Quick Start
//!
//! ```rust
//! use bytes::BytesMut;
//! use cmdsrv_proto::{CommandLine, Dialect, Response};
//!
//! let line = CommandLine::parse("add 2 3 4\n").expect("non-empty input");
//! assert_eq!(line.name(), "add");
//! assert_eq!(line.args(), ["2", "3", "4"]);
//!
//! let mut out = BytesMut::new();
//! Dialect::Framed.encode(&Response::Version { major: 1, minor: 0 }, &mut out);
//! assert_eq!(&out[..], b"OK 21\r\n---\r\nversion: 1.0\r\n\r\n");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

#[cfg(feature = "tokio")]
pub mod codec;
pub mod dialect;
pub mod error;
pub mod line;

#[cfg(feature = "tokio")]
pub use self::codec::{Reply, ReplyCodec};
pub use self::dialect::{BuiltinNames, Dialect, Response};
pub use self::error::ProtocolError;
pub use self::line::{decode_read, CommandLine, READ_BUFFER_SIZE};
