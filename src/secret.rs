use core::fmt;

use rand::Rng;

use crate::config::{CODE_LENGTH, DIGIT_BASE};
use crate::digits::Digits;

/// The hidden code for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretNumber(Digits);

impl SecretNumber {
    /// Draw random digits, keeping each one only if it is not already taken,
    /// until the code is full. Leading zeros are allowed.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        let mut len = 0;
        while len < CODE_LENGTH {
            let candidate = rng.random_range(0..DIGIT_BASE);
            if !digits[..len].contains(&candidate) {
                digits[len] = candidate;
                len += 1;
            }
        }
        Self(Digits(digits))
    }

    pub fn from_digits(digits: Digits) -> Self {
        Self(digits)
    }

    pub fn digits(&self) -> &Digits {
        &self.0
    }
}

impl fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
