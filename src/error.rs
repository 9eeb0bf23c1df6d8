//! Validation errors raised before any output is produced.

use thiserror::Error;

/// Result type alias for generation operations.
pub type PickResult<T> = Result<T, PickError>;

/// Errors that end a run with exit code 2 and no primary output.
#[derive(Error, Debug)]
pub enum PickError {
    #[error("word list is empty")]
    EmptyWordlist,

    #[error("no words remain after length filtering")]
    NoWordsRemain,

    #[error("word count must be between 1 and 20, got {0}")]
    WordCountOutOfRange(usize),

    #[error("not enough candidate words: requested {requested}, pool has {available}")]
    InsufficientPool { requested: usize, available: usize },

    #[error("not enough distinct starting letters: requested {requested}, pool has {available}")]
    InsufficientDistinctLetters { requested: usize, available: usize },

    #[error("unrecognized separator: {0}")]
    UnknownSeparator(String),

    #[error("invalid length bounds: {0}")]
    InvalidLengthBounds(String),

    #[error("--letter cannot be combined with --no-dup-letters for more than one word")]
    ConflictingOptions,
}
