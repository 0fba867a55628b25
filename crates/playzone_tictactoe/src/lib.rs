//! Tic-tac-toe with an optimal computer opponent.
//!
//! Pure logic, no I/O. The presentation layer owns a [`BoardState`] and
//! drives it through three entry points:
//!
//! - [`new_game`] returns an empty board with the human to move
//! - [`player_move`] places the human's `X`
//! - [`computer_move`] asks the [`MoveSelector`] for the best `O` and places it
//!
//! ```
//! use playzone_tictactoe::{computer_move, new_game, player_move, GameStatus};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let state = new_game();
//! let state = player_move(&state, 4)?;
//! let state = computer_move(&state)?;
//! assert_eq!(state.status(), GameStatus::InProgress);
//! assert_eq!(state.board().occupied_count(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod position;
mod search;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use contracts::{GameOngoing, MoveContract, PlayersTurn, SquareIsEmpty};
pub use error::{GameError, MoveError, NoLegalMove};
pub use game::{computer_move, computer_move_with, new_game, player_move};
pub use position::Position;
pub use search::{MoveScore, MoveSelector, Pruning, Score, SearchOutcome, DRAW, LOSS, WIN};
pub use state::BoardState;
pub use types::{Board, BoardParseError, GameStatus, Player, Square, SQUARES};
