use std::fmt;

use crate::config::TokenizerConfig;

/// One unit fed into the tokeniser: a real byte, or the end of input.
///
/// `End` is distinct from every byte, NUL included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Byte(u8),
    End,
}

impl From<u8> for Input {
    fn from(byte: u8) -> Self {
        Input::Byte(byte)
    }
}

impl From<Option<u8>> for Input {
    fn from(byte: Option<u8>) -> Self {
        byte.map_or(Input::End, Input::Byte)
    }
}

/// The two quote characters that open and close quoted spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'\'' => Some(Quote::Single),
            b'"' => Some(Quote::Double),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
        }
    }

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// What an input unit means to the state machine.
///
/// Variants that can end up in a token carry the literal byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    /// Carriage return. Never stored, never ends anything.
    Ignored,
    End,
    Whitespace(u8),
    Quote(Quote),
    Other(u8),
}

impl Event {
    /// The literal byte to append when this event lands inside a token.
    pub fn byte(self) -> Option<u8> {
        match self {
            Event::Whitespace(b) | Event::Other(b) => Some(b),
            Event::Quote(q) => Some(q.as_byte()),
            Event::Ignored | Event::End => None,
        }
    }
}

/// ASCII space class, less the line terminators handled before it.
const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0b' | b'\x0c')
}

pub(crate) fn classify(input: Input, config: &TokenizerConfig) -> Event {
    let byte = match input {
        Input::End => return Event::End,
        Input::Byte(b) => b,
    };

    match byte {
        b'\r' => Event::Ignored,
        b'\n' => Event::End,
        0 if config.nul_terminates => Event::End,
        b if is_space(b) => Event::Whitespace(b),
        b => match Quote::from_byte(b) {
            Some(quote) => Event::Quote(quote),
            None => Event::Other(b),
        },
    }
}
