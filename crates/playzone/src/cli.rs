//! Command-line interface for playzone.

use clap::{Parser, Subcommand, ValueEnum};
use playzone_dice::DiceColor;
use playzone_tictactoe::{Player, Pruning};
use std::path::PathBuf;

/// Play Zone - tic-tac-toe against a perfect opponent, and color dice
#[derive(Parser, Debug)]
#[command(name = "playzone")]
#[command(about = "Terminal games: tic-tac-toe and color dice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "playzone.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Tui,

    /// Score every move in a tic-tac-toe position
    Analyze {
        /// Nine cells in row-major order: X, O, and . for empty (e.g. "XX./.../...")
        #[arg(short, long)]
        board: String,

        /// Side to move
        #[arg(long, value_enum, default_value_t = Side::Computer)]
        to_move: Side,

        /// Search pruning (overrides the config file)
        #[arg(long)]
        pruning: Option<Pruning>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Roll the color dice once
    Dice {
        /// Color to bet on
        #[arg(short, long)]
        color: DiceColor,

        /// Seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Number of dice (overrides the config file)
        #[arg(long)]
        dice: Option<usize>,
    },
}

/// A side on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The human (X)
    Human,
    /// The computer (O)
    Computer,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Player::Human,
            Side::Computer => Player::Computer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["playzone"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("playzone.toml"));
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "playzone",
            "analyze",
            "--board",
            "XX.......",
            "--to-move",
            "human",
            "--pruning",
            "alpha-beta",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Analyze {
                board,
                to_move,
                pruning,
                json,
            }) => {
                assert_eq!(board, "XX.......");
                assert_eq!(to_move, Side::Human);
                assert_eq!(pruning, Some(Pruning::AlphaBeta));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_dice_color() {
        let cli = Cli::try_parse_from(["playzone", "dice", "--color", "green", "--seed", "3"])
            .unwrap();
        match cli.command {
            Some(Command::Dice { color, seed, dice }) => {
                assert_eq!(color, DiceColor::Green);
                assert_eq!(seed, Some(3));
                assert_eq!(dice, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_color_rejected() {
        assert!(Cli::try_parse_from(["playzone", "dice", "--color", "teal"]).is_err());
    }
}
