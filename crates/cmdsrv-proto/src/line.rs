//! Tokenizing of inbound reads.
//!
//! Every read from a connection is parsed on its own: the bytes are split on
//! whitespace, the first token names the command and the rest are arguments.
//! Newlines are just whitespace here, so two lines delivered in one read form a
//! single command line, and a token cut by the read boundary stays cut.

use std::borrow::Cow;

/// Capacity of the per-connection read buffer.
pub const READ_BUFFER_SIZE: usize = 512;

/// Convert the bytes of one read into text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected;
/// clients only ever see the effect through an unknown-command notice.
pub fn decode_read(raw: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(raw)
}

/// A borrowed, tokenized command line.
///
/// Always holds at least one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Split `input` into whitespace-delimited tokens.
    ///
    /// Returns `None` when the input holds nothing but whitespace.
    pub fn parse(input: &'a str) -> Option<Self> {
        let tokens: Vec<&'a str> = input.split_whitespace().collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// The command name (first token).
    #[inline]
    pub fn name(&self) -> &'a str {
        self.tokens[0]
    }

    /// The argument tokens, excluding the command name.
    #[inline]
    pub fn args(&self) -> &[&'a str] {
        &self.tokens[1..]
    }

    /// All tokens, command name at index 0.
    #[inline]
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Number of tokens including the command name.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; a parsed line has at least the command token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
