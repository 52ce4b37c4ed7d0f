//! Error type returned by fallible `DynamicArray` operations.

/// Errors that can occur when reading from or mutating a `DynamicArray`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// A read touched a position outside the logical content.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An insertion position past the end of the logical content.
    #[error("cannot insert at index {index} into array of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// A removal from an empty array.
    #[error("cannot remove from an empty array")]
    Underflow,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrayError>;
