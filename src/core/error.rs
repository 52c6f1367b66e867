//! Engine error type.

use thiserror::Error;

use super::player::Role;

/// Errors reported by the turn engine.
///
/// A failed call leaves the state it was asked to change untouched, with one
/// exception: `play_turn` still consumes the turn (see `GameBoard::play_turn`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A caller-supplied argument does not fit the current game.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No card is left in the deck for the role.
    #[error("no cards left for role {0}")]
    ExhaustedResource(Role),
}

impl GameError {
    /// Whether this is an `InvalidArgument` error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GameError::InvalidArgument(_))
    }

    /// Whether this is an `ExhaustedResource` error.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, GameError::ExhaustedResource(_))
    }
}
