/// Number of digits in a secret number or a guess.
pub const CODE_LENGTH: usize = 4;
/// Digits are drawn from `0..DIGIT_BASE`.
pub const DIGIT_BASE: u8 = 10;
/// Number of codes with `CODE_LENGTH` distinct digits (10 * 9 * 8 * 7).
pub const CANDIDATE_COUNT: usize = 5040;
/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "BULLS_AND_COWS_LOG";
