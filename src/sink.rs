use crate::tokenizer::Token;

/// Receives tokens as the tokeniser finishes them.
///
/// Called synchronously from inside [`Tokenizer::feed`](crate::Tokenizer::feed),
/// at most once per fed unit. An `Err` is logged and otherwise ignored; it
/// does not stop the line from being tokenised.
pub trait TokenSink {
    fn deliver(&mut self, token: Token) -> anyhow::Result<()>;
}

impl<F> TokenSink for F
where
    F: FnMut(Token) -> anyhow::Result<()>,
{
    fn deliver(&mut self, token: Token) -> anyhow::Result<()> {
        self(token)
    }
}

/// Sink built from a closure by [`from_fn`].
pub struct FnSink<F>(F);

impl<F> TokenSink for FnSink<F>
where
    F: FnMut(Token) -> anyhow::Result<()>,
{
    fn deliver(&mut self, token: Token) -> anyhow::Result<()> {
        (self.0)(token)
    }
}

/// Wrap a closure as a sink, letting its argument and return types be inferred.
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(Token) -> anyhow::Result<()>,
{
    FnSink(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        let mut sink = from_fn(|token| {
            seen.push(token.into_text());
            Ok(())
        });
        sink.deliver(Token::new("abc".to_string(), 0, 3, None)).unwrap();
        sink.deliver(Token::new("def".to_string(), 4, 7, None)).unwrap();
        drop(sink);
        assert_eq!(seen, vec!["abc", "def"]);
    }

    #[test]
    fn test_annotated_closure_sink() {
        let mut count = 0;
        let mut sink = |_token: Token| -> anyhow::Result<()> {
            count += 1;
            Ok(())
        };
        sink.deliver(Token::new(String::new(), 0, 0, None)).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_sink_error() {
        let mut sink = from_fn(|_token| anyhow::bail!("not interested"));
        assert!(sink.deliver(Token::new(String::new(), 0, 0, None)).is_err());
    }
}
