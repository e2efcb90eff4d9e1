//! Error types for list operations.

use thiserror::Error;

/// Result type for fallible list operations.
pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index lies outside the range valid for the operation:
    /// `[0, len)` for reads and removals, `[0, len]` for inserts.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
