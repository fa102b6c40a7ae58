use bulls_and_cows::{play, AiPlayer, GameSession};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!(
            "Usage: {} <seed> <rounds>",
            args.first().map_or("sim", String::as_str)
        );
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let rounds: usize = args[2].parse()?;

    let mut session = GameSession::from_seed(seed);
    let mut player = AiPlayer::new(SmallRng::seed_from_u64(seed.wrapping_add(1)), rounds);
    let stats = play(&mut session, &mut player)?;

    let mut result = serde_json::to_value(stats)?;
    result["seed"] = json!(seed);
    result["average_attempts"] = json!(stats.average_attempts());

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
