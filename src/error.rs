use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("token exceeds the {limit} byte limit")]
    BufferFull { limit: usize },

    #[error("could not grow the token buffer")]
    Alloc,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TokenizerError>;
