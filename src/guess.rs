use core::fmt;
use core::str::FromStr;

use crate::common::GuessError;
use crate::digits::Digits;

/// A validated attempt at the secret number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guess(Digits);

impl Guess {
    pub fn from_digits(digits: Digits) -> Self {
        Self(digits)
    }

    pub fn digits(&self) -> &Digits {
        &self.0
    }
}

/// Check that `input` is exactly four decimal digits with no repeats.
///
/// Callers are expected to trim surrounding whitespace first.
pub fn validate(input: &str) -> Result<Guess, GuessError> {
    Digits::parse(input).map(Guess)
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
