//! Fixed-width codes of distinct decimal digits shared by secrets and guesses.

use core::fmt;

use crate::common::GuessError;
use crate::config::{CODE_LENGTH, DIGIT_BASE};

/// Ordered sequence of `CODE_LENGTH` pairwise distinct digits in `0..10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digits(pub(crate) [u8; CODE_LENGTH]);

impl Digits {
    /// Build a code from raw digit values.
    ///
    /// Values outside `0..10` are rejected as [`GuessError::WrongLength`],
    /// the same kind a non-digit character produces when parsing.
    pub fn new(digits: [u8; CODE_LENGTH]) -> Result<Self, GuessError> {
        if digits.iter().any(|&d| d >= DIGIT_BASE) {
            return Err(GuessError::WrongLength);
        }
        let mut seen = 0u16;
        for &d in digits.iter() {
            let bit = 1u16 << d;
            if seen & bit != 0 {
                return Err(GuessError::DuplicateDigits);
            }
            seen |= bit;
        }
        Ok(Self(digits))
    }

    /// Parse exactly four decimal digit characters.
    ///
    /// The shape check runs before the uniqueness check, so `"11a1"` is a
    /// length error rather than a duplicate error.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let bytes = input.as_bytes();
        if bytes.len() != CODE_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(GuessError::WrongLength);
        }
        let mut digits = [0u8; CODE_LENGTH];
        for (slot, b) in digits.iter_mut().zip(bytes) {
            *slot = b - b'0';
        }
        Self::new(digits)
    }

    /// Digit at `index`, panicking when out of range like slice indexing.
    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn as_array(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Whether `digit` occurs at any position.
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }

    /// Every valid code in ascending numeric order, `0123` first.
    pub fn all() -> impl Iterator<Item = Digits> {
        (0u16..10_000).filter_map(|n| {
            let n = n as u32;
            Digits::new([
                (n / 1000) as u8,
                (n / 100 % 10) as u8,
                (n / 10 % 10) as u8,
                (n % 10) as u8,
            ])
            .ok()
        })
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0.iter() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}
