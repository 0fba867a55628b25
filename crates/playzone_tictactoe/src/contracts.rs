//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move may be applied at all.
//! Postconditions relate the state before a move to the state after it.

use super::invariants::{BoardStateInvariants, InvariantSet};
use super::{BoardState, MoveError, Player, Square, SQUARES};
use tracing::warn;

/// Precondition: the game has not been decided yet.
pub struct GameOngoing;

impl GameOngoing {
    /// Rejects moves on terminal states.
    pub fn check(state: &BoardState) -> Result<(), MoveError> {
        if state.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names an empty square.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects out-of-range and occupied squares.
    pub fn check(state: &BoardState, index: usize) -> Result<(), MoveError> {
        if index >= SQUARES {
            Err(MoveError::OutOfBounds { index })
        } else if !state.board().is_empty(index) {
            Err(MoveError::SquareOccupied { index })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the mark belongs to the side to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects marks placed out of turn.
    pub fn check(state: &BoardState, player: Player) -> Result<(), MoveError> {
        if state.to_move() != player {
            Err(MoveError::WrongTurn(player))
        } else {
            Ok(())
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions, checked in order:
/// - Game is ongoing
/// - Square is in range and empty
/// - Mark belongs to the side to move
///
/// Postconditions:
/// - Exactly one square changed, from empty to the mover's mark
/// - State invariants hold
pub struct MoveContract;

impl MoveContract {
    /// Checks every precondition.
    pub fn pre(state: &BoardState, index: usize, player: Player) -> Result<(), MoveError> {
        GameOngoing::check(state)?;
        SquareIsEmpty::check(state, index)?;
        PlayersTurn::check(state, player)?;
        Ok(())
    }

    /// Checks every postcondition.
    pub fn post(before: &BoardState, after: &BoardState) -> Result<(), MoveError> {
        let changed: Vec<usize> = (0..SQUARES)
            .filter(|&i| before.board().get(i) != after.board().get(i))
            .collect();

        let monotonic = match changed.as_slice() {
            [index] => {
                before.board().get(*index) == Some(Square::Empty)
                    && after.board().get(*index) == Some(Square::Occupied(before.to_move()))
            }
            _ => false,
        };
        if !monotonic {
            warn!(?changed, "Board did not grow by exactly one mark");
            return Err(MoveError::InvariantViolation(
                "Board must grow by exactly one mark".to_string(),
            ));
        }

        BoardStateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{new_game, Board};

    #[test]
    fn test_preconditions_in_order() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let finished = BoardState::from_board(board, Player::Human);
        // Terminal wins over every other complaint
        assert_eq!(MoveContract::pre(&finished, 0, Player::Computer), Err(MoveError::GameOver));

        let state = new_game();
        assert_eq!(
            MoveContract::pre(&state, 9, Player::Computer),
            Err(MoveError::OutOfBounds { index: 9 })
        );
        assert_eq!(
            MoveContract::pre(&state, 4, Player::Computer),
            Err(MoveError::WrongTurn(Player::Computer))
        );
        assert_eq!(MoveContract::pre(&state, 4, Player::Human), Ok(()));
    }

    #[test]
    fn test_post_rejects_unchanged_board() {
        let state = new_game();
        assert!(matches!(
            MoveContract::post(&state, &state),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_post_accepts_applied_move() {
        let before = new_game();
        let after = before.apply_move(4, Player::Human).unwrap();
        assert_eq!(MoveContract::post(&before, &after), Ok(()));
    }
}
