use std::io::{self, BufRead, IsTerminal, Stdout, StdinLock, Write};

use crossterm::style::Stylize;

use crate::{
    common::{GuessError, Hint},
    guess::{self, Guess},
    prompt::{parse_yes_no, prompt_until_valid, Question},
    secret::SecretNumber,
};

use super::Player;

const GUESS_PROMPT: &str = "Enter your guess (4 unique digits): ";

/// How a line of game text is rendered on a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// Welcome banner and win message.
    Celebrate,
    Heading,
    /// Yes/no questions.
    Question,
    Error,
    Hint,
    Farewell,
}

/// Render `text` in `tone`, or leave it untouched when styling is off.
fn paint(styled: bool, tone: Tone, text: &str) -> String {
    if !styled {
        return text.to_string();
    }
    match tone {
        Tone::Celebrate => text.green().bold().to_string(),
        Tone::Heading => text.white().bold().to_string(),
        Tone::Question => text.green().to_string(),
        Tone::Error => text.red().to_string(),
        Tone::Hint => text.blue().to_string(),
        Tone::Farewell => text.yellow().to_string(),
    }
}

/// Interactive player reading answers from `input` and writing all game text
/// to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's standard input and output, colored when
    /// stdout is a terminal.
    pub fn stdio() -> Self {
        let stdout = io::stdout();
        let styled = stdout.is_terminal();
        Self::new(io::stdin().lock(), stdout).with_style(styled)
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    /// Player writing plain, unstyled text.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Toggle ANSI colors on the game text.
    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn show_rules(&mut self) -> anyhow::Result<()> {
        let styled = self.styled;
        let out = &mut self.output;
        writeln!(
            out,
            "\n{}",
            paint(styled, Tone::Celebrate, "WELCOME TO THE 'BULLS AND COWS' GAME!")
        )?;
        writeln!(out, "\n{}", paint(styled, Tone::Heading, "Rules:"))?;
        writeln!(
            out,
            "1. The secret number consists of 4 unique digits. Unique means each digit \
             appears only once. For example, 0134 is valid, but 0304 is not because zero \
             is repeated."
        )?;
        writeln!(out, "2. Your goal is to guess this secret number.")?;
        writeln!(out, "3. After each guess, you will receive a hint:")?;
        writeln!(out, "   - Bulls: Correct digits in the correct position.")?;
        writeln!(out, "   - Cows: Correct digits but in the wrong position.")?;
        writeln!(out, "4. Continue guessing until you find the secret number.")?;
        writeln!(out, "\nGood luck!")?;
        Ok(())
    }

    fn confirm(&mut self, question: Question) -> anyhow::Result<Option<bool>> {
        let styled = self.styled;
        writeln!(self.output)?;
        prompt_until_valid(
            &mut self.input,
            &mut self.output,
            &paint(styled, Tone::Question, question.prompt()),
            parse_yes_no,
            |_| paint(styled, Tone::Error, question.retry_hint()),
        )
    }

    fn next_guess(&mut self) -> anyhow::Result<Option<Guess>> {
        let styled = self.styled;
        writeln!(self.output)?;
        prompt_until_valid(
            &mut self.input,
            &mut self.output,
            GUESS_PROMPT,
            guess::validate,
            |e: &GuessError| match e {
                GuessError::WrongLength => paint(styled, Tone::Error, e.message()),
                GuessError::DuplicateDigits => e.message().to_string(),
            },
        )
    }

    fn handle_round_start(&mut self, round: usize) -> anyhow::Result<()> {
        if round == 1 {
            let start = if self.styled {
                "Let's start the game!".bold().to_string()
            } else {
                "Let's start the game!".to_string()
            };
            writeln!(self.output, "\n{}", start)?;
        } else {
            writeln!(self.output, "\nRound {}: a new secret number has been chosen.", round)?;
        }
        Ok(())
    }

    fn handle_hint(&mut self, _guess: &Guess, hint: Hint) -> anyhow::Result<()> {
        if !hint.is_solved() {
            let line = format!("{} Bull(s) and {} Cow(s). Try again!", hint.bulls, hint.cows);
            writeln!(self.output, "{}", paint(self.styled, Tone::Hint, &line))?;
        }
        Ok(())
    }

    fn handle_win(&mut self, secret: &SecretNumber, attempts: usize) -> anyhow::Result<()> {
        let line = format!(
            "WOO-HOO! 🎉 You've guessed the number {} correctly in {} attempt(s)!",
            secret, attempts
        );
        writeln!(self.output, "\n{}", paint(self.styled, Tone::Celebrate, &line))?;
        Ok(())
    }

    fn handle_farewell(&mut self, question: Question) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "\n{}\n",
            paint(self.styled, Tone::Farewell, question.farewell())
        )?;
        self.output.flush()?;
        Ok(())
    }
}
