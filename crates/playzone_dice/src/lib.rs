//! Color dice: pick a color, roll colored dice, win if any die shows it.
//!
//! Randomness is injected through [`rand::Rng`] so games can be replayed
//! with a seeded generator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod color;
mod error;
mod game;

pub use color::DiceColor;
pub use error::DiceError;
pub use game::{win_probability, ColorDiceGame, RollOutcome, DEFAULT_DICE_COUNT};
