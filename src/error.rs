//! Error types for the round engine.
//!
//! A `FetchError` aborts only the round it happened in. Exhaustion and
//! lifecycle errors are reported through `RoundError`.

use thiserror::Error;

use crate::core::RecordId;

/// Failure to obtain a record from a fetcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Upstream has no record with this identifier.
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// Network or protocol failure.
    #[error("Transport error fetching {id}: {message}")]
    Transport { id: RecordId, message: String },

    /// Payload could not be decoded into a record.
    #[error("Decode error for {id}: {message}")]
    Decode { id: RecordId, message: String },
}

impl FetchError {
    /// Identifier the failed request was for.
    #[must_use]
    pub fn id(&self) -> RecordId {
        match self {
            FetchError::NotFound(id) => *id,
            FetchError::Transport { id, .. } | FetchError::Decode { id, .. } => *id,
        }
    }
}

/// Failure of a round-level operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// One of the two fetches failed; nothing was applied.
    #[error("Round aborted: {0}")]
    Fetch(#[from] FetchError),

    /// Fewer than two unused identifiers remain in the pool.
    #[error("Identifier pool exhausted: {remaining} of {pool} unused")]
    SamplerExhausted { pool: usize, remaining: usize },

    /// The session has ended and accepts no further rounds.
    #[error("Session has ended")]
    SessionEnded,

    /// Another round is still being played on this session.
    #[error("A round is already in progress")]
    RoundInProgress,

    /// Scoring was requested before any pair was fetched.
    #[error("No pair has been fetched yet")]
    NoPair,
}

/// Invalid session configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A round draws two distinct identifiers.
    #[error("Identifier pool needs at least 2 distinct ids, got {0}")]
    PoolTooSmall(usize),

    #[error("Duplicate identifier in pool: {0}")]
    DuplicateId(RecordId),
}

/// Convenience Result type for round operations.
pub type Result<T> = std::result::Result<T, RoundError>;
