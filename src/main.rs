#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bulls_and_cows::{
    init_logging, play, AiPlayer, CliPlayer, GameSession, Guess, Hint, Player, Question,
    SecretNumber,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Ai,
}

/// Guess the 4-digit secret number with unique digits.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player: PlayerType,
    #[arg(long, default_value_t = 1, help = "Rounds the AI plays before stopping")]
    rounds: usize,
}

/// Prints what an automated player does so a watcher can follow along.
#[cfg(feature = "std")]
struct Narrated<P> {
    inner: P,
}

#[cfg(feature = "std")]
impl<P: Player> Player for Narrated<P> {
    fn confirm(&mut self, question: Question) -> anyhow::Result<Option<bool>> {
        self.inner.confirm(question)
    }

    fn next_guess(&mut self) -> anyhow::Result<Option<Guess>> {
        self.inner.next_guess()
    }

    fn handle_round_start(&mut self, round: usize) -> anyhow::Result<()> {
        println!("\nRound {}", round);
        self.inner.handle_round_start(round)
    }

    fn handle_hint(&mut self, guess: &Guess, hint: Hint) -> anyhow::Result<()> {
        println!("AI guessed {} -> {} Bull(s) and {} Cow(s)", guess, hint.bulls, hint.cows);
        self.inner.handle_hint(guess, hint)
    }

    fn handle_win(&mut self, secret: &SecretNumber, attempts: usize) -> anyhow::Result<()> {
        println!("AI found {} in {} attempt(s)", secret, attempts);
        self.inner.handle_win(secret, attempts)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut session = match cli.seed {
        Some(s) => GameSession::from_seed(s),
        None => GameSession::from_entropy(),
    };

    match cli.player {
        PlayerType::Human => {
            let mut player = CliPlayer::stdio();
            play(&mut session, &mut player)?;
        }
        PlayerType::Ai => {
            println!("AI player selected.");
            if let Some(s) = cli.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = match cli.seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let mut player = Narrated {
                inner: AiPlayer::new(rng, cli.rounds),
            };
            let stats = play(&mut session, &mut player)?;
            match stats.average_attempts() {
                Some(avg) => println!(
                    "\n{} round(s) won, {:.2} attempt(s) on average",
                    stats.rounds_won, avg
                ),
                None => println!("\nNo rounds played"),
            }
        }
    }
    Ok(())
}
