//! Game state and roll outcomes.

use super::{DiceColor, DiceError};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Dice rolled per turn unless configured otherwise.
pub const DEFAULT_DICE_COUNT: usize = 3;

/// Result of one roll.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The color the player bet on.
    selected: DiceColor,
    /// The face shown by each die.
    faces: Vec<DiceColor>,
}

impl RollOutcome {
    /// Builds an outcome from known faces.
    pub fn new(selected: DiceColor, faces: Vec<DiceColor>) -> Self {
        Self { selected, faces }
    }

    /// True iff at least one die shows the selected color.
    pub fn is_win(&self) -> bool {
        self.faces.contains(&self.selected)
    }

    /// How many dice show the selected color.
    pub fn matches(&self) -> usize {
        self.faces.iter().filter(|&&c| c == self.selected).count()
    }

    /// Message shown to the player.
    pub fn message(&self) -> String {
        if self.is_win() {
            format!(
                "You WIN! You selected {} and it was rolled!",
                self.selected
            )
        } else {
            format!(
                "You LOST! You selected {} but it wasn't rolled. Try again!",
                self.selected
            )
        }
    }
}

/// A color dice table: one chosen color and the latest roll.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ColorDiceGame {
    /// Dice rolled per turn.
    dice_count: usize,
    /// The color currently bet on.
    selected: Option<DiceColor>,
    /// The most recent roll.
    last_roll: Option<RollOutcome>,
}

impl ColorDiceGame {
    /// Creates a game rolling `dice_count` dice.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::NoDice`] when `dice_count` is zero.
    #[instrument]
    pub fn new(dice_count: usize) -> Result<Self, DiceError> {
        if dice_count == 0 {
            return Err(DiceError::NoDice);
        }
        Ok(Self {
            dice_count,
            selected: None,
            last_roll: None,
        })
    }

    /// Bets on `color` for the next roll.
    #[instrument(skip(self))]
    pub fn select(&mut self, color: DiceColor) {
        self.selected = Some(color);
    }

    /// Rolls every die against the selected color.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::NoColorSelected`] if no color was chosen.
    #[instrument(skip(self, rng), fields(selected = ?self.selected))]
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&RollOutcome, DiceError> {
        let selected = self.selected.ok_or(DiceError::NoColorSelected)?;
        let faces = (0..self.dice_count).map(|_| DiceColor::roll(rng)).collect();
        let outcome = RollOutcome::new(selected, faces);
        debug!(faces = ?outcome.faces, win = outcome.is_win(), "Dice rolled");
        Ok(self.last_roll.insert(outcome))
    }
}

impl Default for ColorDiceGame {
    fn default() -> Self {
        Self {
            dice_count: DEFAULT_DICE_COUNT,
            selected: None,
            last_roll: None,
        }
    }
}

/// Chance that at least one of `dice_count` dice shows a chosen color.
pub fn win_probability(dice_count: usize) -> f64 {
    let miss = (DiceColor::ALL.len() - 1) as f64 / DiceColor::ALL.len() as f64;
    1.0 - miss.powf(dice_count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let win = RollOutcome::new(
            DiceColor::Red,
            vec![DiceColor::Blue, DiceColor::Red, DiceColor::Red],
        );
        assert!(win.is_win());
        assert_eq!(win.matches(), 2);
        assert_eq!(win.message(), "You WIN! You selected Red and it was rolled!");

        let loss = RollOutcome::new(
            DiceColor::Green,
            vec![DiceColor::Blue, DiceColor::Red, DiceColor::Orange],
        );
        assert!(!loss.is_win());
        assert_eq!(
            loss.message(),
            "You LOST! You selected Green but it wasn't rolled. Try again!"
        );
    }

    #[test]
    fn test_zero_dice_rejected() {
        assert_eq!(ColorDiceGame::new(0), Err(DiceError::NoDice));
    }

    #[test]
    fn test_probability() {
        assert!((win_probability(1) - 1.0 / 6.0).abs() < 1e-12);
        assert!((win_probability(3) - 91.0 / 216.0).abs() < 1e-12);
        assert_eq!(win_probability(0), 0.0);
    }

    #[test]
    fn test_probability_for_huge_counts() {
        for count in [(1usize << 31) + 1, u32::MAX as usize, usize::MAX] {
            let p = win_probability(count);
            assert!((p - 1.0).abs() < 1e-12, "count {} gave {}", count, p);
        }
    }
}
