//! Play Zone - terminal games
//!
//! Tic-tac-toe against a perfect minimax opponent, plus a color dice game.

#![warn(missing_docs)]

mod cli;
mod commands;
mod config;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayzoneConfig;
use logging::Fallback;
use playzone_tictactoe::MoveSelector;
use tracing::{debug, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayzoneConfig::load_or_default(&cli.config)?;

    let command = cli.command.unwrap_or(Command::Tui);
    let fallback = match command {
        Command::Tui => Fallback::Discard,
        _ => Fallback::Stderr,
    };
    logging::init(&config, fallback)?;
    debug!(?config, "Configuration resolved");

    match command {
        Command::Tui => tui::run(&config),
        Command::Analyze {
            board,
            to_move,
            pruning,
            json,
        } => {
            let config = match pruning {
                Some(pruning) => config.with_pruning(pruning),
                None => config,
            };
            info!(pruning = %config.pruning(), "Analyzing position");
            let selector = MoveSelector::new(*config.pruning());
            commands::run_analyze(&board, to_move.into(), &selector, json)
        }
        Command::Dice { color, seed, dice } => {
            let dice_count = dice.unwrap_or(*config.dice_count());
            commands::run_dice(color, dice_count, seed)
        }
    }
}
