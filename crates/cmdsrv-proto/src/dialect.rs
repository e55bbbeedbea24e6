//! Response dialects.
//!
//! A server speaks exactly one dialect for its whole lifetime:
//!
//! - [`Dialect::Plain`]: bare newline-terminated text, one line per item.
//! - [`Dialect::Framed`]: `OK <len>\r\n` followed by a body of
//!   `---\r\n<payload>\r\n\r\n`, where `<len>` is the body length in bytes.
//!
//! Both dialects also name their built-in commands differently; see
//! [`Dialect::builtin_names`].

use bytes::{BufMut, BytesMut};
use std::fmt;

/// Opening marker of a framed body.
pub const FRAMED_BODY_PREFIX: &str = "---\r\n";

/// Closing marker of a framed body.
pub const FRAMED_BODY_SUFFIX: &str = "\r\n\r\n";

/// Separator between items inside a framed payload.
pub const FRAMED_ITEM_SEPARATOR: &str = "\r\n";

/// Unframed reply sent by the framed dialect for unknown commands.
pub const UNKNOWN_COMMAND_REPLY: &str = "UNKNOWN_COMMAND\r\n";

/// Wire response format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Dialect {
    /// Newline-terminated plain text.
    #[default]
    Plain,
    /// Length-prefixed `OK` envelopes with CRLF line endings.
    Framed,
}

/// Names under which a dialect registers its built-in commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinNames {
    /// Closes the connection without a reply.
    pub close: &'static str,
    /// Lists every registered command.
    pub list: &'static str,
    /// Reports the server version.
    pub version: &'static str,
}

/// A response to encode in the active dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<'a> {
    /// Server version.
    Version {
        /// Major version number.
        major: u32,
        /// Minor version number.
        minor: u32,
    },
    /// Registered command names, already sorted by the caller.
    CommandList(&'a [&'a str]),
    /// Arbitrary items, one per line.
    Lines(&'a [&'a str]),
    /// A single value.
    Value(String),
    /// Notice for a command name that is not registered.
    UnknownCommand(&'a str),
}

impl Dialect {
    /// Built-in command names for this dialect.
    pub const fn builtin_names(self) -> BuiltinNames {
        match self {
            Self::Plain => BuiltinNames {
                close: "exit",
                list: "command-list",
                version: "version",
            },
            Self::Framed => BuiltinNames {
                close: "quit",
                list: "help",
                version: "version",
            },
        }
    }

    /// Encode `response` onto the end of `dst`.
    pub fn encode(self, response: &Response<'_>, dst: &mut BytesMut) {
        match self {
            Self::Plain => encode_plain(response, dst),
            Self::Framed => encode_framed(response, dst),
        }
    }

    /// Encode `response` into a fresh buffer.
    pub fn to_bytes(self, response: &Response<'_>) -> BytesMut {
        let mut dst = BytesMut::new();
        self.encode(response, &mut dst);
        dst
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Framed => f.write_str("framed"),
        }
    }
}

fn encode_plain(response: &Response<'_>, dst: &mut BytesMut) {
    match response {
        Response::Version { major, minor } => {
            put_line(dst, &format!("Version: {major}.{minor}"));
        }
        Response::CommandList(items) | Response::Lines(items) => {
            for item in items.iter() {
                put_line(dst, item);
            }
        }
        Response::Value(value) => put_line(dst, value),
        Response::UnknownCommand(name) => put_line(
            dst,
            &format!("Unknown command: {name}. Type 'command-list' for a list of commands."),
        ),
    }
}

fn encode_framed(response: &Response<'_>, dst: &mut BytesMut) {
    match response {
        Response::Version { major, minor } => {
            put_envelope(dst, &format!("version: {major}.{minor}"));
        }
        Response::CommandList(items) | Response::Lines(items) => {
            put_envelope(dst, &items.join(FRAMED_ITEM_SEPARATOR));
        }
        Response::Value(value) => put_envelope(dst, value),
        Response::UnknownCommand(_) => dst.put_slice(UNKNOWN_COMMAND_REPLY.as_bytes()),
    }
}

fn put_line(dst: &mut BytesMut, line: &str) {
    dst.reserve(line.len() + 1);
    dst.put_slice(line.as_bytes());
    dst.put_u8(b'\n');
}

fn put_envelope(dst: &mut BytesMut, payload: &str) {
    let body_len = FRAMED_BODY_PREFIX.len() + payload.len() + FRAMED_BODY_SUFFIX.len();
    let header = format!("OK {body_len}\r\n");
    dst.reserve(header.len() + body_len);
    dst.put_slice(header.as_bytes());
    dst.put_slice(FRAMED_BODY_PREFIX.as_bytes());
    dst.put_slice(payload.as_bytes());
    dst.put_slice(FRAMED_BODY_SUFFIX.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(response: Response<'_>) -> Vec<u8> {
        Dialect::Plain.to_bytes(&response).to_vec()
    }

    fn framed(response: Response<'_>) -> Vec<u8> {
        Dialect::Framed.to_bytes(&response).to_vec()
    }

    #[test]
    fn plain_version() {
        assert_eq!(plain(Response::Version { major: 1, minor: 0 }), b"Version: 1.0\n");
    }

    #[test]
    fn plain_lines_are_newline_terminated() {
        assert_eq!(plain(Response::Lines(&["a", "b", "c"])), b"a\nb\nc\n");
        assert_eq!(plain(Response::Lines(&[])), b"");
    }

    #[test]
    fn plain_unknown_command_notice() {
        assert_eq!(
            plain(Response::UnknownCommand("foo")),
            b"Unknown command: foo. Type 'command-list' for a list of commands.\n".to_vec()
        );
    }

    #[test]
    fn framed_version_envelope() {
        assert_eq!(
            framed(Response::Version { major: 2, minor: 7 }),
            b"OK 21\r\n---\r\nversion: 2.7\r\n\r\n".to_vec()
        );
    }

    #[test]
    fn framed_list_joins_with_crlf() {
        let out = framed(Response::CommandList(&["help", "quit", "version"]));
        let body = "---\r\nhelp\r\nquit\r\nversion\r\n\r\n";
        assert_eq!(out, format!("OK {}\r\n{}", body.len(), body).into_bytes());
    }

    #[test]
    fn framed_length_counts_bytes_not_chars() {
        let out = framed(Response::Value("é".to_string()));
        // "---\r\n" + 2 bytes + "\r\n\r\n"
        assert!(out.starts_with(b"OK 11\r\n"));
    }

    #[test]
    fn framed_empty_payload_still_enveloped() {
        assert_eq!(framed(Response::Lines(&[])), b"OK 9\r\n---\r\n\r\n\r\n".to_vec());
    }

    #[test]
    fn framed_unknown_command_is_bare() {
        assert_eq!(framed(Response::UnknownCommand("foo")), b"UNKNOWN_COMMAND\r\n".to_vec());
    }

    #[test]
    fn builtin_names_per_dialect() {
        let plain = Dialect::Plain.builtin_names();
        assert_eq!((plain.close, plain.list, plain.version), ("exit", "command-list", "version"));
        let framed = Dialect::Framed.builtin_names();
        assert_eq!((framed.close, framed.list, framed.version), ("quit", "help", "version"));
    }

    #[test]
    fn dialect_display() {
        assert_eq!(Dialect::Plain.to_string(), "plain");
        assert_eq!(Dialect::Framed.to_string(), "framed");
        assert_eq!(Dialect::default(), Dialect::Plain);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn dialect_deserialize_from_toml() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            dialect: Dialect,
        }

        let w: Wrapper = toml::from_str(r#"dialect = "framed""#).unwrap();
        assert_eq!(w.dialect, Dialect::Framed);
        let w: Wrapper = toml::from_str(r#"dialect = "plain""#).unwrap();
        assert_eq!(w.dialect, Dialect::Plain);
        assert!(toml::from_str::<Wrapper>(r#"dialect = "json""#).is_err());
    }
}
