use thiserror::Error;

/// Errors that can occur while reading a DirtyChannel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirtyChannelError {
    /// A thread panicked while holding the channel's lock
    #[error("DirtyChannel lock was poisoned by a panicking writer")]
    LockPoisoned,
}
