#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
pub mod digits;
mod game;
#[cfg(feature = "std")]
pub mod game_loop;
pub mod guess;
pub mod hint;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod prompt;
mod secret;

pub use common::*;
pub use config::*;
pub use digits::Digits;
pub use game::*;
#[cfg(feature = "std")]
pub use game_loop::{play, step, GameState};
pub use guess::{validate, Guess};
pub use hint::score;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
#[cfg(feature = "std")]
pub use player::*;
#[cfg(feature = "std")]
pub use prompt::{parse_yes_no, prompt_until_valid, Question};
pub use secret::SecretNumber;
