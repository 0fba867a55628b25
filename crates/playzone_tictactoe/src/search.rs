//! Minimax move selection.
//!
//! The search is exhaustive: every line of play is followed to a win,
//! loss or draw. Leaves score +1, -1 or 0 from the searching player's
//! point of view regardless of depth, so a slow win is worth exactly as
//! much as a fast one. Among equally scored moves the lowest index wins.

use super::{rules, Board, BoardState, GameError, GameStatus, NoLegalMove, Player, SQUARES};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Minimax value of a position.
pub type Score = i8;

/// Score of a position the searching player has won.
pub const WIN: Score = 1;
/// Score of a drawn position.
pub const DRAW: Score = 0;
/// Score of a position the searching player has lost.
pub const LOSS: Score = -1;

/// Whether the search may skip branches that cannot change the result.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Pruning {
    /// Visit every node.
    #[default]
    Exhaustive,
    /// Alpha-beta cut-offs. Chooses the same moves as `Exhaustive`.
    AlphaBeta,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Chosen square.
    pub index: usize,
    /// Minimax value of the chosen square for the side to move.
    pub score: Score,
    /// Nodes visited, root children included.
    pub nodes: u64,
}

/// Exact minimax value of one legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Square index.
    pub index: usize,
    /// Minimax value for the side to move.
    pub score: Score,
}

/// Picks optimal moves by full-depth minimax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSelector {
    pruning: Pruning,
}

impl MoveSelector {
    /// Creates a selector with the given pruning mode.
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning }
    }

    /// Returns the pruning mode.
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Returns the optimal square for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the game is over or the board is full.
    pub fn select(&self, state: &BoardState) -> Result<usize, NoLegalMove> {
        self.search(state).map(|outcome| outcome.index)
    }

    /// Runs the root search and reports the chosen move with its score.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the game is over or the board is full.
    #[instrument(skip(self, state), fields(pruning = %self.pruning, to_move = %state.to_move()))]
    pub fn search(&self, state: &BoardState) -> Result<SearchOutcome, NoLegalMove> {
        ensure_playable(state)?;

        let me = state.to_move();
        let mut board = *state.board();
        let mut nodes = 0;
        let mut best: Option<(usize, Score)> = None;

        for index in 0..SQUARES {
            if !board.is_empty(index) {
                continue;
            }
            let alpha = best.map_or(Score::MIN, |(_, score)| score);

            board.place(index, me);
            let score = self.minimax(&mut board, me.opponent(), me, alpha, Score::MAX, &mut nodes);
            board.clear(index);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(NoLegalMove)?;
        debug!(index, score, nodes, "Search complete");
        Ok(SearchOutcome {
            index,
            score,
            nodes,
        })
    }

    /// Scores every legal move for the side to move, in ascending index order.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMove`] if the game is over or the board is full.
    #[instrument(skip(self, state), fields(pruning = %self.pruning))]
    pub fn evaluate_moves(&self, state: &BoardState) -> Result<Vec<MoveScore>, NoLegalMove> {
        ensure_playable(state)?;

        let me = state.to_move();
        let mut board = *state.board();
        let mut nodes = 0;
        let mut scores = Vec::new();

        for index in 0..SQUARES {
            if !board.is_empty(index) {
                continue;
            }
            board.place(index, me);
            let score =
                self.minimax(&mut board, me.opponent(), me, Score::MIN, Score::MAX, &mut nodes);
            board.clear(index);
            scores.push(MoveScore { index, score });
        }

        debug!(moves = scores.len(), nodes, "Moves evaluated");
        Ok(scores)
    }

    /// Selects a move for the side to move and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the game is over or the board is full.
    pub fn play(&self, state: &BoardState) -> Result<BoardState, GameError> {
        let index = self.select(state)?;
        Ok(state.apply_move(index, state.to_move())?)
    }

    /// Value of `board` for `me`, with `mover` to play next.
    ///
    /// Places and removes trial marks on `board`, leaving it as it was found.
    fn minimax(
        &self,
        board: &mut Board,
        mover: Player,
        me: Player,
        mut alpha: Score,
        mut beta: Score,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;

        match rules::evaluate(board) {
            GameStatus::Won(winner) if winner == me => return WIN,
            GameStatus::Won(_) => return LOSS,
            GameStatus::Draw => return DRAW,
            GameStatus::InProgress => {}
        }

        let maximizing = mover == me;
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for index in 0..SQUARES {
            if !board.is_empty(index) {
                continue;
            }

            board.place(index, mover);
            let score = self.minimax(board, mover.opponent(), me, alpha, beta, nodes);
            board.clear(index);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                break;
            }
        }

        best
    }
}

fn ensure_playable(state: &BoardState) -> Result<(), NoLegalMove> {
    if state.is_terminal() || state.board().is_full() {
        Err(NoLegalMove)
    } else {
        Ok(())
    }
}
