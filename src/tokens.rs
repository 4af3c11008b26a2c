use std::borrow::Cow;

use crate::sink::TokenSink;
use crate::tokenizer::Token;

/// Ordered collection of the tokens of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token. Returns `false` if there was no room for it.
    pub fn append(&mut self, token: Token) -> bool {
        if self.tokens.try_reserve(1).is_err() {
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Text of every token, in order, with invalid UTF-8 replaced.
    pub fn texts(&self) -> Vec<Cow<'_, str>> {
        self.tokens.iter().map(Token::text).collect()
    }
}

impl TokenSink for Tokens {
    fn deliver(&mut self, token: Token) -> anyhow::Result<()> {
        if !self.append(token) {
            anyhow::bail!("no room for token {}", self.count());
        }
        Ok(())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
