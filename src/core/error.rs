//! Engine error type.
//!
//! Only genuinely exceptional conditions are errors. Expected "nothing to do"
//! outcomes (empty question pool, player already clocked out, block card
//! already spent) are reported as `None`/`false` by the operations themselves.

use std::path::PathBuf;

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by the question store and the game engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// The persisted question resource does not exist.
    #[error("question file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Persisted question data has the wrong schema or an unparsable row.
    #[error("malformed question data: {0}")]
    Format(String),

    /// Reading or writing the backing resource failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `PlayerId` that does not belong to the current game.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// An invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GameError {
    /// Whether the error should abort launch rather than pause a running game.
    #[must_use]
    pub fn is_fatal_at_launch(&self) -> bool {
        matches!(
            self,
            GameError::NotFound { .. } | GameError::Format(_) | GameError::Config(_)
        )
    }
}
