//! Error types
//!
//! The simulation itself cannot fail. These cover misuse of the match
//! lifecycle and bad match configuration.

use thiserror::Error;

use crate::simulation::Lifecycle;

/// Lifecycle contract violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("match has not been started")]
    NotStarted,

    #[error("match has already been started")]
    AlreadyStarted,

    #[error("match is over")]
    Finished,

    #[error("match is not running (currently {0:?})")]
    NotRunning(Lifecycle),

    #[error("match is not paused (currently {0:?})")]
    NotPaused(Lifecycle),
}

/// Match configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown team {0:?}")]
    UnknownTeam(String),

    #[error("home and away cannot both be {0:?}")]
    SameTeam(String),

    #[error("unknown game mode {0:?}")]
    UnknownMode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for lifecycle operations
pub type SimResult<T> = Result<T, SimError>;
