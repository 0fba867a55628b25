//! Entry points for the presentation layer.
//!
//! A game is a sequence of [`BoardState`] values: the caller holds the
//! current state and swaps it for the one each call returns.

use super::{BoardState, GameError, MoveError, MoveSelector, Player};
use tracing::{info, instrument};

/// Starts a new game with an empty board and the human to move.
#[instrument]
pub fn new_game() -> BoardState {
    BoardState::new()
}

/// Places the human's mark at `index`.
///
/// # Errors
///
/// Returns a [`MoveError`] if the square is taken or out of range, the
/// game is over, or it is the computer's turn.
#[instrument(skip(state))]
pub fn player_move(state: &BoardState, index: usize) -> Result<BoardState, MoveError> {
    let next = state.apply_move(index, Player::Human)?;
    if next.is_terminal() {
        info!(status = %next.status(), "Game over");
    }
    Ok(next)
}

/// Lets the computer choose and place its mark.
///
/// # Errors
///
/// Returns [`GameError::NoLegalMove`] if the game is over or the board is
/// full, and [`GameError::IllegalMove`] if it is the human's turn.
#[instrument(skip(state))]
pub fn computer_move(state: &BoardState) -> Result<BoardState, GameError> {
    computer_move_with(&MoveSelector::default(), state)
}

/// Like [`computer_move`] with a caller-supplied selector.
///
/// # Errors
///
/// See [`computer_move`].
#[instrument(skip(selector, state), fields(pruning = %selector.pruning()))]
pub fn computer_move_with(
    selector: &MoveSelector,
    state: &BoardState,
) -> Result<BoardState, GameError> {
    if state.turn() == Some(Player::Human) {
        return Err(MoveError::WrongTurn(Player::Computer).into());
    }
    let index = selector.select(state)?;
    let next = state.apply_move(index, Player::Computer)?;
    info!(index, status = %next.status(), "Computer moved");
    Ok(next)
}
