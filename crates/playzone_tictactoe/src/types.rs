//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const SQUARES: usize = 9;

/// Player in the game.
///
/// The human always plays `X` and the computer always plays `O`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// The human player (`X`).
    Human,
    /// The computer opponent (`O`).
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Returns the mark this player places on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }

    /// Looks up the player owning a mark symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Player::Human),
            'O' => Some(Player::Computer),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; SQUARES] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Iterates over empty square indices in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns a copy of the board with every `X` turned into `O` and vice versa.
    pub fn swap_marks(&self) -> Self {
        let mut squares = self.squares;
        for square in &mut squares {
            if let Square::Occupied(player) = *square {
                *square = Square::Occupied(player.opponent());
            }
        }
        Self { squares }
    }

    /// Places a mark without any rule checks.
    pub(crate) fn place(&mut self, pos: usize, player: Player) {
        self.squares[pos] = Square::Occupied(player);
    }

    /// Clears a square without any rule checks.
    pub(crate) fn clear(&mut self, pos: usize) {
        self.squares[pos] = Square::Empty;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invalid board {:?}: {}", input, reason)]
pub struct BoardParseError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` are marks, `.`, `_` and `-` are empty squares.
    /// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` is accepted.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: String| BoardParseError {
            input: s.to_string(),
            reason,
        };

        let mut squares = [Square::Empty; SQUARES];
        let mut len = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && !matches!(c, '|' | '/')) {
            if len == SQUARES {
                return Err(fail(format!("more than {} cells", SQUARES)));
            }
            squares[len] = match c {
                '.' | '_' | '-' => Square::Empty,
                other => match Player::from_symbol(other) {
                    Some(player) => Square::Occupied(player),
                    None => return Err(fail(format!("unexpected character {:?}", other))),
                },
            };
            len += 1;
        }

        if len != SQUARES {
            return Err(fail(format!("expected {} cells, found {}", SQUARES, len)));
        }
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with three in a row for the given player.
    Won(Player),
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has a decided outcome.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns the status with the winner's identity flipped.
    pub fn mirrored(self) -> Self {
        match self {
            GameStatus::Won(player) => GameStatus::Won(player.opponent()),
            other => other,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Winner: {}", player.symbol()),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
