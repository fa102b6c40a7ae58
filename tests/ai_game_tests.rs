use bulls_and_cows::{
    play, AiPlayer, GameSession, Player, Question, CANDIDATE_COUNT,
};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn ai_wins_requested_rounds() {
    let mut session = GameSession::from_seed(1);
    let mut player = AiPlayer::new(SmallRng::seed_from_u64(2), 20);
    let stats = play(&mut session, &mut player).unwrap();
    assert_eq!(stats.rounds_won, 20);
    assert!(stats.fewest_attempts.unwrap() >= 1);
    assert!(stats.average_attempts().unwrap() < 8.0);
}

#[test]
fn ai_with_zero_rounds_declines() {
    let mut session = GameSession::from_seed(1);
    let mut player = AiPlayer::new(SmallRng::seed_from_u64(2), 0);
    let stats = play(&mut session, &mut player).unwrap();
    assert_eq!(stats.rounds_won, 0);
    assert!(session.round().is_none());
}

#[test]
fn candidates_stay_consistent_with_secret() {
    let mut session = GameSession::from_seed(17);
    let mut player = AiPlayer::new(SmallRng::seed_from_u64(18), 1);
    assert_eq!(player.confirm(Question::Ready).unwrap(), Some(true));

    let secret = *session.start_round().secret();
    player.handle_round_start(1).unwrap();
    assert_eq!(player.candidates().len(), CANDIDATE_COUNT);

    loop {
        let guess = player.next_guess().unwrap().unwrap();
        let hint = session.submit(&guess).unwrap();
        player.handle_hint(&guess, hint).unwrap();
        assert!(player.candidates().contains(secret.digits()));
        if hint.is_solved() {
            assert_eq!(player.candidates(), &[*secret.digits()][..]);
            break;
        }
    }
}

#[test]
fn same_seeds_replay_identically() {
    let run = || {
        let mut session = GameSession::from_seed(123);
        let mut player = AiPlayer::new(SmallRng::seed_from_u64(456), 5);
        play(&mut session, &mut player).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn empty_candidates_is_an_error() {
    let mut player = AiPlayer::new(SmallRng::seed_from_u64(0), 1);
    assert!(player.next_guess().is_err());
}
