//! Commonly used types and utilities for ease of import.

pub use crate::{score, validate, GameSession, Guess, GuessError, Hint, SecretNumber};

#[cfg(feature = "std")]
pub use crate::{play, AiPlayer, CliPlayer, GameState, Player, Question};
