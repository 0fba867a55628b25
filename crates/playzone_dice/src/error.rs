//! Dice game errors.

use derive_more::Display;

/// Why a dice game operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DiceError {
    /// Rolling requires a chosen color.
    #[display("Select a color before rolling")]
    NoColorSelected,
    /// A game needs at least one die.
    #[display("A game needs at least one die")]
    NoDice,
}

impl std::error::Error for DiceError {}
