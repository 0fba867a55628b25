//! Line-oriented commands: position analysis and a single dice roll.

use anyhow::{Context, Result};
use derive_new::new;
use playzone_dice::{win_probability, ColorDiceGame, DiceColor, RollOutcome};
use playzone_tictactoe::{
    Board, BoardState, GameStatus, MoveScore, MoveSelector, NoLegalMove, Player, Position,
    SearchOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, instrument};

/// Everything the search knows about one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct AnalysisReport {
    /// The analyzed board.
    pub board: Board,
    /// Outcome so far.
    pub status: GameStatus,
    /// Side to move.
    pub to_move: Player,
    /// Value of each legal move for the side to move.
    pub moves: Vec<MoveScore>,
    /// The move the selector plays.
    pub best: SearchOutcome,
}

/// Analyzes `board` with `to_move` to play.
///
/// # Errors
///
/// Returns [`NoLegalMove`] when the position is already decided.
#[instrument(skip(board, selector), fields(pruning = %selector.pruning()))]
pub fn analyze(
    board: Board,
    to_move: Player,
    selector: &MoveSelector,
) -> Result<AnalysisReport, NoLegalMove> {
    let opening = if board.occupied_count() % 2 == 0 {
        to_move
    } else {
        to_move.opponent()
    };
    let state = BoardState::from_board(board, opening);

    let moves = selector.evaluate_moves(&state)?;
    let best = selector.search(&state)?;
    info!(index = best.index, score = best.score, nodes = best.nodes, "Position analyzed");

    Ok(AnalysisReport::new(board, state.status(), to_move, moves, best))
}

/// Runs the `analyze` command and prints the report.
pub fn run_analyze(board: &str, to_move: Player, selector: &MoveSelector, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let status = playzone_tictactoe::rules::evaluate(&board);
    let report = analyze(board, to_move, selector)
        .with_context(|| format!("Position is already decided ({})", status))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Human-readable form of a report.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = format!(
        "{}\n\nStatus: {}\nTo move: {} ({})\n\n",
        report.board,
        report.status,
        report.to_move,
        report.to_move.symbol()
    );
    for MoveScore { index, score } in &report.moves {
        let label = Position::from_index(*index).map_or("?", |p| p.label());
        out.push_str(&format!("  {} {:<13} {:+}\n", index + 1, label, score));
    }
    let label = Position::from_index(report.best.index).map_or("?", |p| p.label());
    out.push_str(&format!(
        "\nBest: {} {} (score {:+}, {} nodes)\n",
        report.best.index + 1,
        label,
        report.best.score,
        report.best.nodes
    ));
    out
}

/// Rolls once with `dice_count` dice, seeded when `seed` is given.
#[instrument]
pub fn roll_once(color: DiceColor, dice_count: usize, seed: Option<u64>) -> Result<RollOutcome> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = ColorDiceGame::new(dice_count)?;
    game.select(color);
    Ok(game.roll(&mut rng)?.clone())
}

/// Runs the `dice` command and prints the outcome.
pub fn run_dice(color: DiceColor, dice_count: usize, seed: Option<u64>) -> Result<()> {
    let outcome = roll_once(color, dice_count, seed)?;
    let faces: Vec<String> = outcome.faces().iter().map(|c| c.to_string()).collect();
    println!("Rolled: {}", faces.join(", "));
    println!("{}", outcome.message());
    println!(
        "(chance of a match with {} dice: {:.1}%)",
        dice_count,
        win_probability(dice_count) * 100.0
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use playzone_tictactoe::{Pruning, LOSS, WIN};

    #[test]
    fn test_analyze_blocking_position() {
        let board: Board = "XX./.../...".parse().unwrap();
        let report = analyze(board, Player::Computer, &MoveSelector::default()).unwrap();
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.best.index, 2);
        assert_eq!(report.moves.len(), 7);
        assert!(report.moves.iter().filter(|m| m.index != 2).all(|m| m.score == LOSS));
    }

    #[test]
    fn test_analyze_for_human() {
        // Human to move can complete the top row
        let board: Board = "XX./OO./...".parse().unwrap();
        let report = analyze(board, Player::Human, &MoveSelector::new(Pruning::AlphaBeta)).unwrap();
        assert_eq!(report.best.index, 2);
        assert_eq!(report.best.score, WIN);
    }

    #[test]
    fn test_analyze_decided_position() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(
            analyze(board, Player::Computer, &MoveSelector::default()),
            Err(NoLegalMove)
        );
    }

    #[test]
    fn test_render_report_mentions_best_move() {
        let board: Board = "OO./XX./...".parse().unwrap();
        let report = analyze(board, Player::Computer, &MoveSelector::default()).unwrap();
        let text = render_report(&report);
        assert!(text.contains("Best: 3 Top-right (score +1"));
        assert!(text.contains("To move: Computer (O)"));
    }

    #[test]
    fn test_seeded_roll_is_reproducible() {
        let a = roll_once(DiceColor::Red, 3, Some(11)).unwrap();
        let b = roll_once(DiceColor::Red, 3, Some(11)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.faces().len(), 3);
    }

    #[test]
    fn test_zero_dice_is_an_error() {
        assert!(roll_once(DiceColor::Red, 0, Some(1)).is_err());
    }
}
