//! Error types for line storage and its observers.

use thiserror::Error;

/// Errors that can occur while mutating a [`LineStorage`](crate::LineStorage)
/// or while an observer handles the resulting notification.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No line exists at the requested index.
    #[error("line index {index} out of range (line count {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Line count at the time of the request.
        len: usize,
    },

    /// An add notification arrived from a storage that holds no lines.
    #[error("add notification from empty storage")]
    EmptySource,

    /// Reading input failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for storage results.
pub type Result<T> = std::result::Result<T, StorageError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
