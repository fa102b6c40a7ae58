#![cfg(feature = "std")]

//! Blocking prompt loops shared by the ready, replay and guess prompts.

use std::io::{BufRead, Write};

use crate::common::UnrecognizedYesNo;

/// The two yes/no questions asked during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Asked once after the rules are shown.
    Ready,
    /// Asked after each won round.
    Replay,
}

impl Question {
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Ready => "Are you ready to start playing? (yes/no): ",
            Question::Replay => "Do you want to play another round? (yes/no): ",
        }
    }

    /// Shown when the answer is neither "yes" nor "no".
    pub fn retry_hint(&self) -> &'static str {
        match self {
            Question::Ready => "Please type \"yes\" to start or \"no\" to exit.",
            Question::Replay => "Please type \"yes\" to play again or \"no\" to exit.",
        }
    }

    /// Printed when the player declines.
    pub fn farewell(&self) -> &'static str {
        match self {
            Question::Ready => "We look forward to seeing you next time! Goodbye! 👋",
            Question::Replay => "See you next time! Goodbye! 👋",
        }
    }
}

/// Case-insensitive "yes"/"no", ignoring surrounding whitespace.
pub fn parse_yes_no(input: &str) -> Result<bool, UnrecognizedYesNo> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(UnrecognizedYesNo),
    }
}

/// Write `prompt`, read a line and hand it to `parse` until it succeeds.
///
/// Each rejected line is reported through `describe` before the prompt is
/// shown again. Bytes that are not valid UTF-8 are replaced rather than
/// failing the read, so such lines are rejected by `parse` like any other
/// malformed input. Returns `Ok(None)` once `input` is exhausted.
pub fn prompt_until_valid<R, W, T, E, P, D>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    mut parse: P,
    describe: D,
) -> anyhow::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    P: FnMut(&str) -> Result<T, E>,
    D: Fn(&E) -> String,
{
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        match parse(line.trim()) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                log::debug!("rejected input {:?}", line.trim());
                writeln!(output, "{}", describe(&e))?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn yes_no_ignores_case_and_whitespace() {
        assert_eq!(parse_yes_no("YES"), Ok(true));
        assert_eq!(parse_yes_no("  No \n"), Ok(false));
        assert_eq!(parse_yes_no("y"), Err(UnrecognizedYesNo));
        assert_eq!(parse_yes_no(""), Err(UnrecognizedYesNo));
    }

    #[test]
    fn reprompts_until_valid() {
        let mut input = Cursor::new("maybe\n\nyes\n");
        let mut output = Vec::new();
        let answer = prompt_until_valid(
            &mut input,
            &mut output,
            Question::Ready.prompt(),
            parse_yes_no,
            |_| Question::Ready.retry_hint().to_string(),
        )
        .unwrap();
        assert_eq!(answer, Some(true));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(Question::Ready.prompt()).count(), 3);
        assert_eq!(text.matches(Question::Ready.retry_hint()).count(), 2);
    }

    #[test]
    fn exhausted_input_yields_none() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();
        let answer = prompt_until_valid(
            &mut input,
            &mut output,
            Question::Replay.prompt(),
            parse_yes_no,
            |_| Question::Replay.retry_hint().to_string(),
        )
        .unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn non_utf8_line_is_rejected_not_fatal() {
        let mut input = Cursor::new(b"\xff\xfe\nno\n".to_vec());
        let mut output = Vec::new();
        let answer = prompt_until_valid(
            &mut input,
            &mut output,
            Question::Replay.prompt(),
            parse_yes_no,
            |_| Question::Replay.retry_hint().to_string(),
        )
        .unwrap();
        assert_eq!(answer, Some(false));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(Question::Replay.retry_hint()).count(), 1);
    }
}
