//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so the search and the state machine share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};

use super::{Board, GameStatus};

/// Evaluates a board into a game status.
///
/// A completed line wins; otherwise a full board is a draw and anything
/// else is still in progress. When more than one line is complete (only
/// possible on hand-built boards) the first line in [`LINES`] decides.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
