//! Error types for moves and move selection.

use super::Player;
use derive_more::{Display, From};

/// A move that cannot be applied to the current state.
///
/// Always recoverable: the state is left untouched and the caller
/// should ask for another move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", index)]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", index)]
    SquareOccupied {
        /// The rejected index.
        index: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Move selection was requested on a state with nothing left to play.
///
/// Indicates a caller bug: the state was terminal or full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("No legal move available")]
pub struct NoLegalMove;

impl std::error::Error for NoLegalMove {}

/// Any failure of the game entry points.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum GameError {
    /// The move was rejected.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),
    /// No move could be selected.
    #[display("{}", _0)]
    NoLegalMove(NoLegalMove),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            GameError::NoLegalMove(e) => Some(e),
        }
    }
}
