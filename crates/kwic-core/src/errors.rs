//! Error types for word and line construction.

use thiserror::Error;

/// Errors that can occur when building [`Word`](crate::Word)s and
/// [`Line`](crate::Line)s from raw text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A word was constructed from an empty string.
    #[error("word must not be empty")]
    EmptyWord,

    /// A word contained a delimiter character.
    #[error("word contains a delimiter: {0:?}")]
    InvalidWord(String),
}

/// Convenience type alias for core results.
pub type Result<T> = std::result::Result<T, CoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
