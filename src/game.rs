use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    common::{GameError, Hint},
    guess::Guess,
    hint,
    secret::SecretNumber,
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
}

/// One play-through, from secret generation to a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    secret: SecretNumber,
    attempts: usize,
    status: RoundStatus,
}

impl Round {
    pub fn secret(&self) -> &SecretNumber {
        &self.secret
    }

    /// Guesses scored so far in this round.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }
}

/// Totals across the rounds won in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionStats {
    pub rounds_won: usize,
    pub total_attempts: usize,
    pub fewest_attempts: Option<usize>,
}

impl SessionStats {
    /// Mean attempts per won round, `None` before the first win.
    pub fn average_attempts(&self) -> Option<f64> {
        if self.rounds_won == 0 {
            None
        } else {
            Some(self.total_attempts as f64 / self.rounds_won as f64)
        }
    }

    fn record_win(&mut self, attempts: usize) {
        self.rounds_won += 1;
        self.total_attempts += attempts;
        self.fewest_attempts = Some(match self.fewest_attempts {
            Some(best) => best.min(attempts),
            None => attempts,
        });
    }
}

/// Session state owned by the top-level driver: the random source, the round
/// in progress and the running totals.
pub struct GameSession {
    rng: SmallRng,
    round: Option<Round>,
    stats: SessionStats,
}

impl GameSession {
    /// Create a session drawing secrets from `rng`. No round is active yet.
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            round: None,
            stats: SessionStats::default(),
        }
    }

    /// Session with a fixed seed, producing a reproducible series of secrets.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Session seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }

    /// Begin a new round with a fresh secret, discarding any previous round.
    pub fn start_round(&mut self) -> &Round {
        let secret = SecretNumber::generate(&mut self.rng);
        log::info!("round {} started", self.stats.rounds_won + 1);
        log::trace!("secret is {}", secret);
        self.round.insert(Round {
            secret,
            attempts: 0,
            status: RoundStatus::InProgress,
        })
    }

    /// Score a guess against the active round's secret.
    pub fn submit(&mut self, guess: &Guess) -> Result<Hint, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        if round.status == RoundStatus::Won {
            return Err(GameError::RoundAlreadyWon);
        }
        let result = hint::score(&round.secret, guess);
        round.attempts += 1;
        log::debug!(
            "guess {} -> {} bulls, {} cows (attempt {})",
            guess,
            result.bulls,
            result.cows,
            round.attempts
        );
        if result.is_solved() {
            round.status = RoundStatus::Won;
            self.stats.record_win(round.attempts);
            log::info!("round won in {} attempts", round.attempts);
        }
        Ok(result)
    }

    /// The round in progress or just won, if any.
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// End the current round, dropping its secret.
    pub fn finish_round(&mut self) -> Option<Round> {
        self.round.take()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
