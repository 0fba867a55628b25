//! First-class invariants for board states.
//!
//! Invariants are logical properties that must hold for every state the
//! engine hands out. They are checked after each move in debug builds
//! and can be tested independently.

use super::{rules, BoardState, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the cached status is what the rules say about the board.
pub struct StatusMatchesBoard;

impl Invariant<BoardState> for StatusMatchesBoard {
    fn holds(state: &BoardState) -> bool {
        state.status() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}

/// Invariant: the last move's square holds the mark of the player who made it.
pub struct LastMoveOccupied;

impl Invariant<BoardState> for LastMoveOccupied {
    fn holds(state: &BoardState) -> bool {
        match state.last_move() {
            None => true,
            Some(index) => {
                state.board().get(index) == Some(Square::Occupied(state.to_move().opponent()))
            }
        }
    }

    fn description() -> &'static str {
        "Last move belongs to the player who just moved"
    }
}

/// Every invariant a [`BoardState`] maintains.
pub type BoardStateInvariants = (StatusMatchesBoard, LastMoveOccupied);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_game, player_move, Board, GameStatus, Player};

    #[test]
    fn test_fresh_game_holds() {
        assert!(BoardStateInvariants::check_all(&new_game()).is_ok());
    }

    #[test]
    fn test_after_moves_holds() {
        let state = player_move(&new_game(), 4).unwrap();
        let state = state.apply_move(0, Player::Computer).unwrap();
        assert!(StatusMatchesBoard::holds(&state));
        assert!(LastMoveOccupied::holds(&state));
    }

    #[test]
    fn test_stale_status_detected() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let state = BoardState::from_board(board, Player::Human).with_status(GameStatus::InProgress);
        let violations = BoardStateInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, StatusMatchesBoard::description());
    }
}
