use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::str::Utf8Error;

use super::Quote;

/// A finished token.
///
/// Holds exactly the bytes that were fed, without the quotes that delimited
/// it. `start..end` indexes the fed unit stream; for a token closed by its
/// quote the range covers both quote characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    bytes: Vec<u8>,
    start: usize,
    end: usize,
    quote: Option<Quote>,
}

impl Token {
    pub(crate) fn new(
        bytes: impl Into<Vec<u8>>,
        start: usize,
        end: usize,
        quote: Option<Quote>,
    ) -> Self {
        Token {
            bytes: bytes.into(),
            start,
            end,
            quote,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The token as UTF-8, failing if the fed bytes were not.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    /// The token as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn into_text(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The quote that closed this token, if it was a properly closed quoted token.
    pub fn quote(&self) -> Option<Quote> {
        self.quote
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
