//! Error types for the recall engine.
//!
//! A wrong click from the player is NOT an error - it is a normal
//! `ClickOutcome`. Errors here are things the embedder got wrong
//! (impossible configuration), resource limits (pool exhaustion under
//! `LevelCap::Fail`), or I/O failures from the score store.

use thiserror::Error;

/// Result type alias for engine operations.
pub type RecallResult<T> = Result<T, RecallError>;

/// Unified error type for all engine operations.
#[derive(Debug, Error)]
pub enum RecallError {
    /// A sequence longer than the button pool was requested.
    ///
    /// Only reachable under `LevelCap::Fail`; `LevelCap::Clamp` holds the
    /// level at pool size instead.
    #[error("sequence of length {requested} exceeds pool of {pool_size} buttons")]
    PoolExhausted {
        /// Sequence length the current level asked for.
        requested: usize,
        /// Number of distinct buttons available.
        pool_size: usize,
    },

    /// The engine configuration is impossible.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with it.
        reason: String,
    },

    /// The high-score store failed to read or write.
    #[error("score store I/O: {0}")]
    Store(#[from] std::io::Error),
}
