//! Pull-style driving: read units from a source until the line ends.

use std::io::{self, Read};

use tracing::debug;

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::tokenizer::{Input, Status, Tokenizer};
use crate::tokens::Tokens;

/// Something that hands out input units one at a time, like `getc`.
pub trait UnitSource {
    fn next_unit(&mut self) -> Result<Input>;
}

/// Units from a fixed string, then [`Input::End`] forever.
pub struct StrSource<'a> {
    bytes: std::slice::Iter<'a, u8>,
}

impl<'a> StrSource<'a> {
    pub fn new(input: &'a str) -> Self {
        StrSource {
            bytes: input.as_bytes().iter(),
        }
    }
}

impl UnitSource for StrSource<'_> {
    fn next_unit(&mut self) -> Result<Input> {
        Ok(self.bytes.next().copied().into())
    }
}

/// Units from any reader, then [`Input::End`] at EOF.
///
/// Reads a byte at a time; wrap slow readers in a `BufReader`.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }
}

impl<R: Read> UnitSource for ReaderSource<R> {
    fn next_unit(&mut self) -> Result<Input> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(Input::End),
                Ok(_) => return Ok(Input::Byte(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Every token of one line together with how the line ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tokens: Tokens,
    pub status: Status,
}

/// Feed `source` into a freshly initialised `tokenizer` until the line ends.
pub fn tokenise<S>(tokenizer: &mut Tokenizer, source: &mut S) -> Result<Line>
where
    S: UnitSource + ?Sized,
{
    tokenizer.init();
    let mut tokens = Tokens::new();

    let status = loop {
        let unit = source.next_unit()?;
        let status = tokenizer.feed(unit, &mut tokens);
        if status.is_terminal() {
            break status;
        }
    };

    debug!(count = tokens.count(), ?status, "tokenised line");
    Ok(Line { tokens, status })
}

/// Tokenise a single string with the default configuration.
pub fn tokenise_str(input: &str) -> Line {
    tokenise_str_with(input, TokenizerConfig::default())
}

/// Tokenise a single string with the given configuration.
pub fn tokenise_str_with(input: &str, config: TokenizerConfig) -> Line {
    let mut tokenizer = Tokenizer::with_config(config);
    let mut tokens = Tokens::new();
    let mut status = Status::Continue;

    for unit in input.bytes().map(Input::from).chain(std::iter::once(Input::End)) {
        status = tokenizer.feed(unit, &mut tokens);
        if status.is_terminal() {
            break;
        }
    }

    Line { tokens, status }
}
