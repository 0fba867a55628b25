//! Board state: the grid, whose turn it is, and the outcome so far.

use super::contracts::MoveContract;
use super::{rules, Board, GameStatus, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A tic-tac-toe position together with its turn and outcome.
///
/// States are values: [`BoardState::apply_move`] returns a new state and
/// leaves the original untouched. The side to move is derived from the
/// number of marks on the board and the player who opened the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    board: Board,
    opening: Player,
    status: GameStatus,
    last_move: Option<usize>,
}

impl BoardState {
    /// Creates an empty board where the human moves first.
    #[instrument]
    pub fn new() -> Self {
        Self::with_opening(Player::Human)
    }

    /// Creates an empty board where `opening` moves first.
    #[instrument]
    pub fn with_opening(opening: Player) -> Self {
        Self {
            board: Board::new(),
            opening,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Wraps an arbitrary board, e.g. a position to analyze.
    ///
    /// The status is computed from the board. The side to move is
    /// `opening` when an even number of marks are down and its opponent
    /// otherwise.
    #[instrument]
    pub fn from_board(board: Board, opening: Player) -> Self {
        Self {
            board,
            opening,
            status: rules::evaluate(&board),
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the most recent move made through this state, if any.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Returns the player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        if self.board.occupied_count() % 2 == 0 {
            self.opening
        } else {
            self.opening.opponent()
        }
    }

    /// Returns the side to move, or `None` once the game is decided.
    pub fn turn(&self) -> Option<Player> {
        (!self.is_terminal()).then(|| self.to_move())
    }

    /// Returns true once the game has a decided outcome.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// True iff `index` is on the board, empty, and the game is ongoing.
    pub fn is_legal_move(&self, index: usize) -> bool {
        !self.is_terminal() && self.board.is_empty(index)
    }

    /// Places `player`'s mark at `index` and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the game is over, the index is out of
    /// range, the square is taken, or `player` is not the side to move.
    /// `self` is never modified.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Self, MoveError> {
        MoveContract::pre(self, index, player)?;

        let mut next = *self;
        next.board.place(index, player);
        next.last_move = Some(index);
        next.status = rules::evaluate(&next.board);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(index, %player, status = ?next.status, "Move applied");
        Ok(next)
    }

    /// Starts over with an empty board; the human always moves first.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Self {
        Self::new()
    }

    #[cfg(test)]
    pub(crate) fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_alternates() {
        let state = BoardState::new();
        assert_eq!(state.turn(), Some(Player::Human));

        let state = state.apply_move(4, Player::Human).unwrap();
        assert_eq!(state.turn(), Some(Player::Computer));
        assert_eq!(state.last_move(), Some(4));

        let state = state.apply_move(0, Player::Computer).unwrap();
        assert_eq!(state.turn(), Some(Player::Human));
    }

    #[test]
    fn test_opening_computer() {
        let state = BoardState::with_opening(Player::Computer);
        assert_eq!(state.to_move(), Player::Computer);
        assert_eq!(
            state.apply_move(0, Player::Human),
            Err(MoveError::WrongTurn(Player::Human))
        );
    }

    #[test]
    fn test_apply_does_not_mutate_original() {
        let state = BoardState::new();
        let _next = state.apply_move(4, Player::Human).unwrap();
        assert_eq!(state, BoardState::new());
    }

    #[test]
    fn test_terminal_has_no_turn() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let state = BoardState::from_board(board, Player::Human);
        assert_eq!(state.status(), GameStatus::Won(Player::Human));
        assert_eq!(state.turn(), None);
        assert!(!state.is_legal_move(5));
    }

    #[test]
    fn test_is_legal_move() {
        let state = BoardState::new().apply_move(4, Player::Human).unwrap();
        assert!(state.is_legal_move(0));
        assert!(!state.is_legal_move(4));
        assert!(!state.is_legal_move(9));
    }

    #[test]
    fn test_reset_returns_human_first() {
        let state = BoardState::with_opening(Player::Computer)
            .apply_move(0, Player::Computer)
            .unwrap();
        let fresh = state.reset();
        assert_eq!(fresh, BoardState::new());
        assert_eq!(fresh.turn(), Some(Player::Human));
    }
}
