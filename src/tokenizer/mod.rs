//! The quote-aware line tokeniser.
//!
//! A [`Tokenizer`] consumes one [`Input`] per [`feed`](Tokenizer::feed)
//! call. Words are split on ASCII whitespace; `'...'` and `"..."` group
//! whitespace into a single token, and a quoted span inside a word
//! (`abc" def "ghi`) is folded into that word. There is no escape
//! processing.

mod buffer;
mod event;
mod token;

use tracing::{debug, trace, warn};

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::sink::TokenSink;

use buffer::TokenBuffer;
use event::{classify, Event};

pub use event::{Input, Quote};
pub use token::Token;

/// Where the tokeniser is within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Freshly initialised; becomes `NoToken` before the first unit is handled.
    Init,
    /// Between tokens.
    NoToken,
    /// Inside an unquoted token.
    RegularToken,
    /// Inside a token that began with the given quote.
    QuotedToken(Quote),
    /// Inside a quoted span embedded in an unquoted token.
    QuotedRegularToken(Quote),
    /// The line is finished.
    Done,
}

/// Outcome of a single [`Tokenizer::feed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// More input is expected.
    Continue,
    /// The line ended cleanly.
    Ok,
    /// The line ended inside a quote. The truncated token was still delivered.
    IncompleteToken,
    /// Fed after the line had already ended.
    AlreadyDone,
    /// The token buffer could not grow.
    Error,
}

impl Status {
    /// Whether the line is over and the caller should stop feeding.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Continue)
    }
}

/// Splits one line into tokens, one fed unit at a time.
///
/// Starts in [`State::Init`]; call [`init`](Tokenizer::init) to reuse it for
/// another line. Once a line has ended every further feed reports
/// [`Status::AlreadyDone`].
#[derive(Debug)]
pub struct Tokenizer {
    config: TokenizerConfig,
    state: State,
    current: Option<TokenBuffer>,
    token_start: usize,
    position: usize,
    status: Status,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::with_config(TokenizerConfig::default())
    }

    pub fn with_config(config: TokenizerConfig) -> Self {
        Tokenizer {
            config,
            state: State::Init,
            current: None,
            token_start: 0,
            position: 0,
            status: Status::Continue,
        }
    }

    /// Reset for a new line, dropping any half-built token.
    pub fn init(&mut self) {
        self.state = State::Init;
        self.current = None;
        self.token_start = 0;
        self.position = 0;
        self.status = Status::Continue;
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of units consumed since the last `init`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Status reported by the most recent feed.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Feed one unit, delivering at most one finished token to `sink`.
    pub fn feed<S>(&mut self, input: impl Into<Input>, sink: &mut S) -> Status
    where
        S: TokenSink + ?Sized,
    {
        let event = classify(input.into(), &self.config);
        self.status = Status::Continue;

        if let Err(e) = self.dispatch(event, sink) {
            warn!(position = self.position, "abandoning line: {}", e);
            self.current = None;
            self.transition(State::Done);
            self.status = Status::Error;
        }

        self.position += 1;
        self.status
    }

    fn dispatch<S>(&mut self, event: Event, sink: &mut S) -> Result<()>
    where
        S: TokenSink + ?Sized,
    {
        match self.state {
            State::Init => {
                self.transition(State::NoToken);
                self.dispatch(event, sink)
            }
            State::NoToken => self.no_token(event),
            State::RegularToken => self.regular_token(event, sink),
            State::QuotedToken(quote) => self.quoted_token(quote, event, sink),
            State::QuotedRegularToken(quote) => self.quoted_regular_token(quote, event, sink),
            State::Done => {
                self.status = Status::AlreadyDone;
                Ok(())
            }
        }
    }

    fn no_token(&mut self, event: Event) -> Result<()> {
        match event {
            Event::End => self.finish(Status::Ok),
            Event::Ignored | Event::Whitespace(_) => {}
            Event::Quote(quote) => {
                self.start_token();
                self.transition(State::QuotedToken(quote));
            }
            Event::Other(byte) => {
                self.start_token();
                self.append(byte)?;
                self.transition(State::RegularToken);
            }
        }
        Ok(())
    }

    fn regular_token<S>(&mut self, event: Event, sink: &mut S) -> Result<()>
    where
        S: TokenSink + ?Sized,
    {
        match event {
            Event::Ignored => {}
            Event::End => {
                self.emit(self.position, None, sink);
                self.finish(Status::Ok);
            }
            Event::Whitespace(_) => {
                self.emit(self.position, None, sink);
                self.transition(State::NoToken);
            }
            Event::Quote(quote) => self.transition(State::QuotedRegularToken(quote)),
            Event::Other(byte) => self.append(byte)?,
        }
        Ok(())
    }

    fn quoted_token<S>(&mut self, quote: Quote, event: Event, sink: &mut S) -> Result<()>
    where
        S: TokenSink + ?Sized,
    {
        match event {
            Event::Ignored => {}
            Event::End => {
                self.emit(self.position, None, sink);
                self.finish(Status::IncompleteToken);
            }
            Event::Quote(q) if q == quote => {
                // The range includes the closing quote.
                self.emit(self.position + 1, Some(quote), sink);
                self.transition(State::NoToken);
            }
            _ => self.append_event(event)?,
        }
        Ok(())
    }

    fn quoted_regular_token<S>(&mut self, quote: Quote, event: Event, sink: &mut S) -> Result<()>
    where
        S: TokenSink + ?Sized,
    {
        match event {
            Event::Ignored => {}
            Event::End => {
                self.emit(self.position, None, sink);
                self.finish(Status::IncompleteToken);
            }
            Event::Quote(q) if q == quote => self.transition(State::RegularToken),
            _ => self.append_event(event)?,
        }
        Ok(())
    }

    fn transition(&mut self, next: State) {
        trace!(from = ?self.state, to = ?next, position = self.position, "transition");
        self.state = next;
    }

    fn finish(&mut self, status: Status) {
        debug!(?status, position = self.position, "line complete");
        self.status = status;
        self.transition(State::Done);
    }

    fn start_token(&mut self) {
        self.current = Some(TokenBuffer::new(self.config.max_token_len));
        self.token_start = self.position;
    }

    fn append(&mut self, byte: u8) -> Result<()> {
        debug_assert!(self.current.is_some(), "no token in progress in {:?}", self.state);
        match self.current.as_mut() {
            Some(buffer) => buffer.push(byte),
            None => Ok(()),
        }
    }

    fn append_event(&mut self, event: Event) -> Result<()> {
        match event.byte() {
            Some(byte) => self.append(byte),
            None => Ok(()),
        }
    }

    /// Hand the current token to the sink. The buffer is released either way.
    fn emit<S>(&mut self, end: usize, quote: Option<Quote>, sink: &mut S)
    where
        S: TokenSink + ?Sized,
    {
        let buffer = self.current.take().unwrap_or_default();
        let len = buffer.len();
        let token = Token::new(buffer.into_bytes(), self.token_start, end, quote);
        debug!(start = token.start(), end, len, ?quote, "token");

        if let Err(e) = sink.deliver(token) {
            warn!("token sink failed: {:#}", e);
        }
    }
}
