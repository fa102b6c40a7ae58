#[cfg(feature = "std")]
mod cli_session_tests {
    use std::io::Cursor;

    use bulls_and_cows::{
        play, score, validate, CliPlayer, GameSession, Question, SecretNumber,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const GUESS_PROMPT: &str = "Enter your guess (4 unique digits): ";

    fn secret_for(seed: u64) -> SecretNumber {
        let mut rng = SmallRng::seed_from_u64(seed);
        SecretNumber::generate(&mut rng)
    }

    fn run(seed: u64, script: &str) -> (bulls_and_cows::SessionStats, String) {
        let mut session = GameSession::from_seed(seed);
        let mut player = CliPlayer::new(Cursor::new(script.to_string()), Vec::new());
        let stats = play(&mut session, &mut player).unwrap();
        let text = String::from_utf8(player.into_output()).unwrap();
        (stats, text)
    }

    #[test]
    fn declining_at_start_never_asks_for_a_guess() {
        let (stats, text) = run(1, "no\n");
        assert!(text.contains("Rules:"));
        assert!(text.contains(Question::Ready.prompt()));
        assert!(text.contains(Question::Ready.farewell()));
        assert!(!text.contains(GUESS_PROMPT));
        assert_eq!(stats.rounds_won, 0);
    }

    #[test]
    fn first_guess_equal_to_secret_wins_immediately() {
        let seed = 2024;
        let secret = secret_for(seed);
        let (stats, text) = run(seed, &format!("yes\n{}\nno\n", secret));
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.total_attempts, 1);
        assert!(text.contains(&format!("You've guessed the number {} correctly", secret)));
        assert!(!text.contains("Try again!"));
        assert!(text.contains(Question::Replay.farewell()));
    }

    #[test]
    fn wrong_guess_reports_bulls_and_cows() {
        let seed = 7;
        let secret = secret_for(seed);
        let wrong = if secret.to_string() == "9876" { "0123" } else { "9876" };
        let expected = score(&secret, &validate(wrong).unwrap());
        let (stats, text) = run(seed, &format!("yes\n{}\n{}\nno\n", wrong, secret));
        assert!(text.contains(&format!(
            "{} Bull(s) and {} Cow(s). Try again!",
            expected.bulls, expected.cows
        )));
        assert_eq!(stats.total_attempts, 2);
    }

    #[test]
    fn invalid_input_is_reported_and_reprompted() {
        let seed = 3;
        let secret = secret_for(seed);
        let script = format!("maybe\nYES\n12a4\n1123\n{}\nwhat\nno\n", secret);
        let (stats, text) = run(seed, &script);
        assert!(text.contains(Question::Ready.retry_hint()));
        assert!(text.contains("Invalid input. Please enter exactly 4 digits."));
        assert!(text.contains("Digits must be unique."));
        assert!(text.contains(Question::Replay.retry_hint()));
        assert_eq!(text.matches(Question::Replay.prompt()).count(), 2);
        assert_eq!(text.matches(GUESS_PROMPT).count(), 3);
        assert_eq!(stats.total_attempts, 1);
    }

    #[test]
    fn replay_starts_a_fresh_round() {
        let seed = 42;
        let mut rng = SmallRng::seed_from_u64(seed);
        let first = SecretNumber::generate(&mut rng);
        let second = SecretNumber::generate(&mut rng);
        let script = format!("yes\n{}\nyes\n{}\nno\n", first, second);
        let (stats, text) = run(seed, &script);
        assert_eq!(stats.rounds_won, 2);
        assert!(text.contains("Let's start the game!"));
        assert!(text.contains("Round 2"));
        assert!(text.contains(&format!("the number {} correctly", second)));
    }

    #[test]
    fn exhausted_input_ends_quietly() {
        let seed = 9;
        let secret = secret_for(seed);
        let wrong = if secret.to_string() == "0123" { "4567" } else { "0123" };
        let (stats, text) = run(seed, &format!("yes\n{}\n", wrong));
        assert_eq!(stats.rounds_won, 0);
        assert_eq!(stats.total_attempts, 0);
        assert!(text.contains("Try again!"));
        assert!(!text.contains("You've guessed the number"));
        assert!(!text.contains(Question::Replay.prompt()));
        assert!(!text.contains(Question::Ready.farewell()));
    }

    #[test]
    fn non_utf8_guess_is_reprompted() {
        let seed = 12;
        let secret = secret_for(seed);
        let mut script = b"yes\n".to_vec();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(format!("{}\nno\n", secret).as_bytes());

        let mut session = GameSession::from_seed(seed);
        let mut player = CliPlayer::new(Cursor::new(script), Vec::new());
        let stats = play(&mut session, &mut player).unwrap();
        let text = String::from_utf8(player.into_output()).unwrap();

        assert!(text.contains("Invalid input. Please enter exactly 4 digits."));
        assert_eq!(text.matches(GUESS_PROMPT).count(), 2);
        assert_eq!(stats.rounds_won, 1);
        assert_eq!(stats.total_attempts, 1);
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let seed = 4;
        let (_, text) = run(seed, &format!("yes\n12\n{}\nno\n", secret_for(seed)));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn styled_output_colors_messages() {
        let seed = 4;
        let secret = secret_for(seed);
        let script = format!("yes\n12\n{}\nno\n", secret);
        let mut session = GameSession::from_seed(seed);
        let mut player = CliPlayer::new(Cursor::new(script), Vec::new()).with_style(true);
        play(&mut session, &mut player).unwrap();
        let text = String::from_utf8(player.into_output()).unwrap();

        assert!(text.contains('\x1b'));
        assert!(text.contains("Invalid input. Please enter exactly 4 digits."));
        assert!(text.contains(Question::Replay.farewell()));
    }
}
