#![cfg(feature = "std")]

//! Drives a [`GameSession`] through the ready / play / replay state machine,
//! taking every decision from a [`Player`].

use crate::{
    game::{GameSession, RoundStatus, SessionStats},
    player::Player,
    prompt::Question,
};

/// States of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Rules shown, waiting for the player to agree to start.
    AwaitingReady,
    /// A round is running; each step scores one guess.
    Playing,
    /// The secret was just matched.
    RoundWon,
    /// Waiting for the player to choose another round.
    AwaitingReplay,
    /// The session is over.
    Terminated,
}

/// Advance the session by one transition.
pub fn step<P: Player + ?Sized>(
    state: GameState,
    session: &mut GameSession,
    player: &mut P,
) -> anyhow::Result<GameState> {
    let next = match state {
        GameState::AwaitingReady => {
            player.show_rules()?;
            match player.confirm(Question::Ready)? {
                Some(true) => GameState::Playing,
                Some(false) => {
                    player.handle_farewell(Question::Ready)?;
                    GameState::Terminated
                }
                None => GameState::Terminated,
            }
        }
        GameState::Playing => {
            if session.round().is_none() {
                session.start_round();
                player.handle_round_start(session.stats().rounds_won + 1)?;
            }
            let Some(guess) = player.next_guess()? else {
                return Ok(GameState::Terminated);
            };
            let hint = session.submit(&guess).map_err(|e| anyhow::anyhow!(e))?;
            player.handle_hint(&guess, hint)?;
            if hint.is_solved() {
                GameState::RoundWon
            } else {
                GameState::Playing
            }
        }
        GameState::RoundWon => {
            let round = session
                .finish_round()
                .ok_or_else(|| anyhow::anyhow!("no round to finish"))?;
            debug_assert_eq!(round.status(), RoundStatus::Won);
            player.handle_win(round.secret(), round.attempts())?;
            GameState::AwaitingReplay
        }
        GameState::AwaitingReplay => match player.confirm(Question::Replay)? {
            Some(true) => GameState::Playing,
            Some(false) => {
                player.handle_farewell(Question::Replay)?;
                GameState::Terminated
            }
            None => GameState::Terminated,
        },
        GameState::Terminated => GameState::Terminated,
    };
    Ok(next)
}

/// Run a full session until the player leaves or runs out of input.
pub fn play<P: Player + ?Sized>(
    session: &mut GameSession,
    player: &mut P,
) -> anyhow::Result<SessionStats> {
    let mut state = GameState::AwaitingReady;
    while state != GameState::Terminated {
        state = step(state, session, player)?;
    }
    let stats = *session.stats();
    log::info!(
        "session ended after {} round(s) won, {} attempt(s)",
        stats.rounds_won,
        stats.total_attempts
    );
    Ok(stats)
}
