use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::Hint,
    config::CANDIDATE_COUNT,
    digits::Digits,
    guess::Guess,
    hint,
    prompt::Question,
    secret::SecretNumber,
};

use super::Player;

/// Self-playing player that only ever guesses codes consistent with every
/// hint received in the current round.
pub struct AiPlayer {
    rng: SmallRng,
    candidates: Vec<Digits>,
    rounds_to_play: usize,
    rounds_won: usize,
}

impl AiPlayer {
    /// Player that wins `rounds_to_play` rounds and then declines to continue.
    pub fn new(rng: SmallRng, rounds_to_play: usize) -> Self {
        Self {
            rng,
            candidates: Vec::with_capacity(CANDIDATE_COUNT),
            rounds_to_play,
            rounds_won: 0,
        }
    }

    /// Codes still possible as the secret.
    pub fn candidates(&self) -> &[Digits] {
        &self.candidates
    }
}

impl Player for AiPlayer {
    fn confirm(&mut self, question: Question) -> anyhow::Result<Option<bool>> {
        let answer = match question {
            Question::Ready => self.rounds_to_play > 0,
            Question::Replay => self.rounds_won < self.rounds_to_play,
        };
        Ok(Some(answer))
    }

    fn next_guess(&mut self) -> anyhow::Result<Option<Guess>> {
        if self.candidates.is_empty() {
            return Err(anyhow::anyhow!("no code is consistent with the hints received"));
        }
        let pick = self.rng.random_range(0..self.candidates.len());
        Ok(Some(Guess::from_digits(self.candidates[pick])))
    }

    fn handle_round_start(&mut self, _round: usize) -> anyhow::Result<()> {
        self.candidates.clear();
        self.candidates.extend(Digits::all());
        Ok(())
    }

    fn handle_hint(&mut self, guess: &Guess, result: Hint) -> anyhow::Result<()> {
        self.candidates
            .retain(|candidate| hint::compare(candidate, guess.digits()) == result);
        log::debug!("{} candidates remain", self.candidates.len());
        Ok(())
    }

    fn handle_win(&mut self, _secret: &SecretNumber, _attempts: usize) -> anyhow::Result<()> {
        self.rounds_won += 1;
        Ok(())
    }
}
