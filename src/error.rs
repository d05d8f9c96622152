use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Structurally malformed input: empty token, bad corpus line, ...
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Model data that cannot be turned into a scorer.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
