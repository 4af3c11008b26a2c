/// Knobs that change how a [`Tokenizer`](crate::Tokenizer) treats its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Treat a NUL byte as the end of the line, the way C strings end.
    pub nul_terminates: bool,
    /// Largest number of bytes a single token may hold.
    pub max_token_len: Option<usize>,
}

impl TokenizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nul_terminates(mut self, nul_terminates: bool) -> Self {
        self.nul_terminates = nul_terminates;
        self
    }

    pub fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = Some(max_token_len);
        self
    }
}
