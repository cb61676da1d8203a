use thiserror::Error;

/// Returned when a value cannot be read back out of a bit stream, either
/// because the stream ended early or because the bits do not form a valid
/// value of the requested type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Could not deserialize value from bit stream")]
pub struct SerdeErr;
