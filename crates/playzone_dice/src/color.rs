//! Die faces.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One face of a color die.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum DiceColor {
    /// Red face.
    Red,
    /// Blue face.
    Blue,
    /// Green face.
    Green,
    /// Yellow face.
    Yellow,
    /// Purple face.
    Purple,
    /// Orange face.
    Orange,
}

impl DiceColor {
    /// Every face in display order.
    pub const ALL: [DiceColor; 6] = [
        DiceColor::Red,
        DiceColor::Blue,
        DiceColor::Green,
        DiceColor::Yellow,
        DiceColor::Purple,
        DiceColor::Orange,
    ];

    /// Rolls a single die.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Position in [`DiceColor::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next color, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous color, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_all_matches_iter() {
        assert_eq!(DiceColor::iter().collect::<Vec<_>>(), DiceColor::ALL.to_vec());
        assert_eq!(DiceColor::COUNT, 6);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("purple".parse::<DiceColor>().unwrap(), DiceColor::Purple);
        assert_eq!("RED".parse::<DiceColor>().unwrap(), DiceColor::Red);
        assert!("Magenta".parse::<DiceColor>().is_err());
    }

    #[test]
    fn test_cycle() {
        assert_eq!(DiceColor::Orange.next(), DiceColor::Red);
        assert_eq!(DiceColor::Red.prev(), DiceColor::Orange);
        assert_eq!(DiceColor::Green.next().prev(), DiceColor::Green);
    }
}
