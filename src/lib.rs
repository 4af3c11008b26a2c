//! Streaming line tokeniser with shell-like quoting.
//!
//! Bytes are fed one at a time into a [`Tokenizer`]; finished tokens are
//! handed to a [`TokenSink`] as soon as they close, and every feed reports a
//! [`Status`] so the caller knows when the line is over.

pub mod config;
pub mod error;
pub mod sink;
pub mod source;
pub mod tokenizer;
pub mod tokens;

pub use config::TokenizerConfig;
pub use error::TokenizerError;
pub use sink::TokenSink;
pub use source::{tokenise, tokenise_str, tokenise_str_with, Line, ReaderSource, StrSource, UnitSource};
pub use tokenizer::{Input, Quote, State, Status, Token, Tokenizer};
pub use tokens::Tokens;
