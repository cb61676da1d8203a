use thiserror::Error;

use netwrap_serde::SerdeErr;

/// Errors raised while decoding a full-state payload into a container.
///
/// A container that returns one of these keeps its previous contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An element, key or value could not be read
    #[error("Malformed or truncated payload: {0}")]
    Serde(#[from] SerdeErr),

    /// The element count prefix was negative
    #[error("Payload announced a negative element count ({count})")]
    NegativeCount { count: i32 },

    /// The element count prefix exceeded the configured limit
    #[error("Payload announced {count} elements, more than the limit of {max}")]
    CountTooLarge { count: usize, max: usize },

    /// The element count prefix cannot fit in what is left of the stream
    #[error("Payload announced {count} entries but only {bits_remaining} bits remain")]
    CountExceedsStream { count: usize, bits_remaining: usize },

    /// A mapping payload contained the same key twice
    #[error("Payload contained duplicate key {key}")]
    DuplicateKey { key: String },
}
