//! Player trait and implementations
//!
//! A Player is the source of every decision in a session:
//! - Answering the ready and replay questions
//! - Supplying guesses
//! - Receiving feedback on guesses and wins
//!
//! Implementations:
//! - AiPlayer: Candidate-elimination solver
//! - CliPlayer: Interactive command-line player

use crate::{
    common::Hint,
    guess::Guess,
    prompt::Question,
    secret::SecretNumber,
};

/// Interface implemented by different player types.
///
/// `Ok(None)` from [`Player::confirm`] or [`Player::next_guess`] means the
/// player has no more input and the session should end.
pub trait Player {
    /// Present the rules before the first question.
    fn show_rules(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Answer a yes/no question.
    fn confirm(&mut self, question: Question) -> anyhow::Result<Option<bool>>;

    /// Produce the next valid guess for the current round.
    fn next_guess(&mut self) -> anyhow::Result<Option<Guess>>;

    /// A fresh secret has been drawn; `round` counts from 1.
    fn handle_round_start(&mut self, _round: usize) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the player of the hint for its last guess.
    fn handle_hint(&mut self, _guess: &Guess, _hint: Hint) -> anyhow::Result<()> {
        Ok(())
    }

    /// The round was solved after `attempts` guesses.
    fn handle_win(&mut self, _secret: &SecretNumber, _attempts: usize) -> anyhow::Result<()> {
        Ok(())
    }

    /// The player declined `question`; the session is over.
    fn handle_farewell(&mut self, _question: Question) -> anyhow::Result<()> {
        Ok(())
    }
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
