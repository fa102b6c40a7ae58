//! Bulls and cows scoring.

use crate::common::Hint;
use crate::config::CODE_LENGTH;
use crate::digits::Digits;
use crate::guess::Guess;
use crate::secret::SecretNumber;

/// Compare a guess against the secret.
///
/// Each position counts towards at most one of bulls or cows: a bull when
/// the digits match in place, otherwise a cow when the guessed digit occurs
/// elsewhere in the secret. Both codes have distinct digits, so no digit is
/// ever counted twice.
pub fn score(secret: &SecretNumber, guess: &Guess) -> Hint {
    compare(secret.digits(), guess.digits())
}

/// Scoring on raw codes, used by the solver to test candidate secrets.
pub(crate) fn compare(secret: &Digits, guess: &Digits) -> Hint {
    let mut hint = Hint::default();
    for i in 0..CODE_LENGTH {
        let d = guess.get(i);
        if d == secret.get(i) {
            hint.bulls += 1;
        } else if secret.contains(d) {
            hint.cows += 1;
        }
    }
    hint
}
