//! Crate-level error type.

use thiserror::Error;

use crate::core::PokemonId;
use crate::pokemon::ProviderError;
use crate::store::StoreError;

/// Which way the sequencer was asked to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => f.write_str("next"),
            Direction::Backward => f.write_str("previous"),
        }
    }
}

/// Errors surfaced by game operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("no {direction} pokemon id")]
    SequenceExhausted { direction: Direction },

    #[error("no decision to undo")]
    EmptyHistory,

    #[error("session has not been started")]
    NotStarted,

    #[error("pokemon {id} is unavailable: {reason}")]
    ProviderUnavailable { id: PokemonId, reason: String },

    #[error("record for pokemon {id} is malformed: {source}")]
    MalformedRecord {
        id: PokemonId,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),
}

impl GameError {
    /// Whether this is one of the intentional no-op boundaries.
    ///
    /// Boundaries leave all state untouched; callers should disable or
    /// ignore the action rather than report a failure.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        matches!(self, GameError::SequenceExhausted { .. } | GameError::EmptyHistory)
    }
}

impl From<ProviderError> for GameError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable { id, reason } => GameError::ProviderUnavailable { id, reason },
            ProviderError::Malformed { id, source } => GameError::MalformedRecord { id, source },
            fixtures @ ProviderError::Fixtures { .. } => GameError::Config(fixtures.to_string()),
        }
    }
}

/// Result alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
