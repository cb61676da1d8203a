use thiserror::Error;

/// Errors that can occur during NetList operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetListError {
    /// Index was outside `0..len` on an access, replace or removal
    #[error("Index {index} is out of range for NetList of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Index was outside `0..=len` on an insertion
    #[error("Cannot insert at index {index} into NetList of length {len}")]
    InsertOutOfRange { index: usize, len: usize },

    /// Target slice too small to receive every element from `offset` on
    #[error("Cannot copy {needed} elements into slice of length {available} at offset {offset}")]
    CopyOutOfRange {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// Errors that can occur during NetMap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetMapError {
    /// Key was absent on an access path that requires it
    #[error("Key {key} not found in NetMap")]
    KeyNotFound { key: String },

    /// `add` was called with a key already present
    #[error("Key {key} already exists in NetMap")]
    DuplicateKey { key: String },

    /// Operation intentionally unavailable on NetMap
    #[error("NetMap does not support {operation}: {reason}")]
    NotSupported {
        operation: &'static str,
        reason: &'static str,
    },
}
