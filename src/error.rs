use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),

    #[error("Invalid suit: {0}")]
    InvalidSuit(String),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Card index {0} out of range (0-51)")]
    CardIndexOutOfRange(usize),

    #[error("Tuple index {0} out of range (0-2703)")]
    TupleIndexOutOfRange(usize),

    #[error("Wordlist must contain exactly {expected} words, got {got}")]
    WordlistLength { expected: usize, got: usize },

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type SeedResult<T> = Result<T, SeedError>;
