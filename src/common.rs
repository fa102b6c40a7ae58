//! Common types for Bulls and Cows: hints and the errors raised while playing.

use crate::config::CODE_LENGTH;

/// Feedback for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hint {
    /// Digits matching the secret at the same position.
    pub bulls: u8,
    /// Digits present in the secret at a different position.
    pub cows: u8,
}

impl Hint {
    pub const fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    /// Returns `true` when every position is a bull.
    pub fn is_solved(&self) -> bool {
        self.bulls as usize == CODE_LENGTH
    }
}

/// Reasons a guess is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// Input is not exactly four decimal digits.
    WrongLength,
    /// At least one digit appears more than once.
    DuplicateDigits,
}

impl core::fmt::Display for GuessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl GuessError {
    /// Text shown to the player before re-prompting.
    pub fn message(&self) -> &'static str {
        match self {
            GuessError::WrongLength => "Invalid input. Please enter exactly 4 digits.",
            GuessError::DuplicateDigits => "Digits must be unique.",
        }
    }
}

/// Answer to a yes/no prompt was neither "yes" nor "no".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecognizedYesNo;

impl core::fmt::Display for UnrecognizedYesNo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Expected \"yes\" or \"no\"")
    }
}

/// Errors returned by `GameSession` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A guess was submitted before a round was started.
    NoActiveRound,
    /// A guess was submitted after the round was already won.
    RoundAlreadyWon,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::NoActiveRound => write!(f, "No round is in progress"),
            GameError::RoundAlreadyWon => write!(f, "The current round has already been won"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
#[cfg(feature = "std")]
impl std::error::Error for UnrecognizedYesNo {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
