//! Application state and logic.
//!
//! The app is driven by key presses and a clock so it can be exercised
//! without a terminal.

use super::input;
use crate::config::PlayzoneConfig;
use crossterm::event::KeyCode;
use playzone_dice::{ColorDiceGame, DiceColor, DiceError};
use playzone_tictactoe::{
    computer_move_with, player_move, rules, BoardState, GameStatus, MoveSelector, Player,
    Position,
};
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Which game is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Tic-tac-toe against the computer.
    TicTacToe,
    /// Color dice.
    Dice,
}

/// Finished games since the app started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Games the human won.
    pub human: u32,
    /// Games the computer won.
    pub computer: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(Player::Human) => self.human += 1,
            Some(Player::Computer) => self.computer += 1,
            None if status == GameStatus::Draw => self.draws += 1,
            None => {}
        }
    }
}

/// Main application state.
pub struct App {
    screen: Screen,
    state: BoardState,
    cursor: Position,
    selector: MoveSelector,
    thinking_delay: Duration,
    reply_due: Option<Instant>,
    hint: Option<usize>,
    tally: Tally,
    status_message: String,
    dice: ColorDiceGame,
    dice_cursor: DiceColor,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::NoDice`] if the config asks for zero dice.
    pub fn new(config: &PlayzoneConfig, rng: StdRng) -> Result<Self, DiceError> {
        let state = BoardState::new();
        Ok(Self {
            screen: Screen::TicTacToe,
            state,
            cursor: Position::Center,
            selector: MoveSelector::new(*config.pruning()),
            thinking_delay: config.thinking_delay(),
            reply_due: None,
            hint: None,
            tally: Tally::default(),
            status_message: turn_message(&state),
            dice: ColorDiceGame::new(*config.dice_count())?,
            dice_cursor: DiceColor::Red,
            rng,
            should_quit: false,
        })
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current tic-tac-toe state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Square suggested by the last hint request.
    pub fn hint(&self) -> Option<usize> {
        self.hint
    }

    /// Finished games so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while the computer's reply is pending.
    pub fn is_thinking(&self) -> bool {
        self.reply_due.is_some()
    }

    /// Dice game state.
    pub fn dice(&self) -> &ColorDiceGame {
        &self.dice
    }

    /// Color under the dice cursor.
    pub fn dice_cursor(&self) -> DiceColor {
        self.dice_cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press at time `now`.
    #[instrument(skip(self, now), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if key == KeyCode::Char('q') {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::TicTacToe => self.handle_board_key(key, now),
            Screen::Dice => self.handle_dice_key(key),
        }
    }

    /// Plays the computer's reply once its thinking delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.reply_due else {
            return;
        };
        if now < due {
            return;
        }
        self.reply_due = None;

        match computer_move_with(&self.selector, &self.state) {
            Ok(next) => {
                self.state = next;
                if let Some(index) = next.last_move().and_then(Position::from_index) {
                    debug!(position = %index, "Computer reply shown");
                }
                self.after_move();
            }
            Err(e) => {
                warn!(error = %e, "Computer could not move");
                self.status_message = format!("Computer error: {}", e);
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index(), now),
            KeyCode::Char('h') => self.show_hint(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('n') => {
                debug!("Switching to dice");
                self.screen = Screen::Dice;
            }
            other => {
                if let Some(index) = input::digit_square(other) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.place(index, now);
                }
            }
        }
    }

    fn place(&mut self, index: usize, now: Instant) {
        if self.is_thinking() {
            self.status_message = "Computer is thinking...".to_string();
            return;
        }

        match player_move(&self.state, index) {
            Ok(next) => {
                self.state = next;
                self.hint = None;
                if next.is_terminal() {
                    self.after_move();
                } else {
                    self.reply_due = Some(now + self.thinking_delay);
                    self.status_message = "Computer is thinking...".to_string();
                }
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.status_message = e.to_string();
            }
        }
    }

    fn after_move(&mut self) {
        if self.state.is_terminal() {
            self.tally.record(self.state.status());
            info!(status = %self.state.status(), tally = ?self.tally, "Game finished");
        }
        self.status_message = turn_message(&self.state);
    }

    fn show_hint(&mut self) {
        if self.state.turn() != Some(Player::Human) || self.is_thinking() {
            return;
        }
        match self.selector.select(&self.state) {
            Ok(index) => {
                self.hint = Some(index);
                if let Some(pos) = Position::from_index(index) {
                    self.status_message = format!("Hint: {}", pos);
                }
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Restarts the game. The human always moves first.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = self.state.reset();
        self.reply_due = None;
        self.hint = None;
        self.cursor = Position::Center;
        self.status_message = turn_message(&self.state);
    }

    fn handle_dice_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Right => {
                self.dice_cursor = input::move_color(self.dice_cursor, key);
            }
            KeyCode::Char(' ') => self.select_color(self.dice_cursor),
            KeyCode::Enter => self.roll(),
            KeyCode::Char('b') => {
                debug!("Back to tic-tac-toe");
                self.screen = Screen::TicTacToe;
            }
            other => {
                if let Some(color) = input::digit_color(other) {
                    self.dice_cursor = color;
                    self.select_color(color);
                }
            }
        }
    }

    fn select_color(&mut self, color: DiceColor) {
        self.dice.select(color);
        self.status_message = format!("You selected: {}", color);
    }

    fn roll(&mut self) {
        match self.dice.roll(&mut self.rng) {
            Ok(outcome) => self.status_message = outcome.message(),
            Err(e) => self.status_message = e.to_string(),
        }
    }
}

/// Status line for a tic-tac-toe state.
pub fn turn_message(state: &BoardState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("Next Turn: {}", state.to_move().symbol()),
        GameStatus::Won(player) => format!("Winner: {}", player.symbol()),
        GameStatus::Draw => "Draw!".to_string(),
    }
}

/// Squares to highlight as the winning line.
pub fn highlighted_line(state: &BoardState) -> Option<[usize; 3]> {
    rules::winning_line(state.board())
}
