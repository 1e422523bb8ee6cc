//! Tests for the game session state machine.

use hotcold_game::{
    Difficulty, Direction, FixedPicker, GameError, GameSession, GuessOutcome, Hint, Proximity,
    SessionState, ThreadRngPicker,
};

fn session_with_secret(difficulty: Difficulty, secret: i64) -> GameSession {
    GameSession::new(difficulty, FixedPicker::new(secret))
}

#[test]
fn test_new_session_is_active() {
    let session = session_with_secret(Difficulty::Medium, 42);
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.attempts_remaining(), 10);
    assert!(session.history().is_empty());
    assert_eq!(session.secret(), 42);
}

#[test]
fn test_secret_within_bounds() {
    let mut picker = ThreadRngPicker::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let tier = difficulty.tier();
        for _ in 0..10_000 {
            let session = GameSession::new(difficulty, &mut picker);
            assert!(
                (*tier.lower_bound()..=*tier.upper_bound()).contains(&session.secret()),
                "secret {} outside {:?}",
                session.secret(),
                tier
            );
        }
    }
}

#[test]
fn test_exact_guess_wins_with_one_attempt_left() {
    let mut session = session_with_secret(Difficulty::Hard, 100);
    for guess in [1, 2, 3, 4] {
        session.submit_guess(guess).expect("Active session");
    }
    assert_eq!(session.attempts_remaining(), 1);

    let feedback = session.submit_guess(100).expect("Active session");
    assert_eq!(*feedback.outcome(), GuessOutcome::Win);
    assert_eq!(*feedback.attempts_remaining(), 1);
    assert_eq!(session.state(), SessionState::Won);
}

#[test]
fn test_miss_decrements_by_one() {
    let mut session = session_with_secret(Difficulty::Easy, 25);
    let mut expected = 15;
    for guess in [1, 2, 3] {
        let feedback = session.submit_guess(guess).expect("Active session");
        expected -= 1;
        assert_eq!(*feedback.attempts_remaining(), expected);
    }
}

#[test]
fn test_lost_after_exactly_budget_misses() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let budget = *difficulty.tier().attempt_budget();
        let mut session = session_with_secret(difficulty, 50);

        for i in 1..budget {
            session.submit_guess(i64::from(i)).expect("Active session");
            assert_eq!(session.state(), SessionState::Active, "{difficulty} lost early");
        }

        let feedback = session.submit_guess(0).expect("Active session");
        assert!(matches!(feedback.outcome(), GuessOutcome::Loss { secret: 50, .. }));
        assert_eq!(*feedback.attempts_remaining(), 0);
        assert_eq!(session.state(), SessionState::Lost);
    }
}

#[test]
fn test_terminated_session_rejects_guesses() {
    let mut session = session_with_secret(Difficulty::Easy, 7);
    session.submit_guess(7).expect("Active session");

    let result = session.submit_guess(7);
    assert_eq!(result, Err(GameError::SessionTerminated));
    assert_eq!(session.history(), &[7]);
    assert_eq!(session.attempts_remaining(), 15);
}

#[test]
fn test_lost_session_never_goes_negative() {
    let mut session = session_with_secret(Difficulty::Hard, 100);
    for guess in 1..=5 {
        session.submit_guess(guess).expect("Active session");
    }
    assert!(session.submit_guess(6).is_err());
    assert_eq!(session.attempts_remaining(), 0);
}

#[test]
fn test_proximity_boundaries() {
    let secret = 100;
    let cases = [
        (105, Proximity::Hot),
        (106, Proximity::Warm),
        (115, Proximity::Warm),
        (116, Proximity::Cold),
        (95, Proximity::Hot),
        (94, Proximity::Warm),
        (85, Proximity::Warm),
        (84, Proximity::Cold),
    ];
    for (guess, expected) in cases {
        let mut session = session_with_secret(Difficulty::Hard, secret);
        let feedback = session.submit_guess(guess).expect("Active session");
        let hint = feedback.outcome().hint().expect("Miss has a hint");
        assert_eq!(hint.proximity, expected, "guess {guess}");
    }
}

#[test]
fn test_distance_zero_is_win_not_hot() {
    let mut session = session_with_secret(Difficulty::Hard, 100);
    let feedback = session.submit_guess(100).expect("Active session");
    assert_eq!(*feedback.outcome(), GuessOutcome::Win);
    assert_eq!(feedback.outcome().hint(), None);
}

#[test]
fn test_history_in_call_order() {
    let mut session = session_with_secret(Difficulty::Easy, 50);
    let guesses = [12, 3, 44, 3, -8];
    for (k, guess) in guesses.iter().enumerate() {
        let feedback = session.submit_guess(*guess).expect("Active session");
        assert_eq!(feedback.history().len(), k + 1);
    }
    assert_eq!(session.history(), &guesses);
}

#[test]
fn test_out_of_range_guess_is_recorded() {
    let mut session = session_with_secret(Difficulty::Easy, 10);
    let feedback = session.submit_guess(999).expect("Active session");
    assert_eq!(
        *feedback.outcome(),
        GuessOutcome::Hint(Hint::new(Proximity::Cold, Direction::Lower))
    );
    assert_eq!(feedback.history(), &[999]);
}

#[test]
fn test_easy_scenario_win_in_three() {
    let mut session = session_with_secret(Difficulty::Easy, 25);

    let outcomes: Vec<GuessOutcome> = [10, 30, 25]
        .into_iter()
        .map(|g| *session.submit_guess(g).expect("Active session").outcome())
        .collect();

    assert_eq!(
        outcomes,
        [
            GuessOutcome::Hint(Hint::new(Proximity::Warm, Direction::Higher)),
            GuessOutcome::Hint(Hint::new(Proximity::Hot, Direction::Lower)),
            GuessOutcome::Win,
        ]
    );
    assert_eq!(session.attempts_used(), 3);
    assert!(session.is_won());
}

#[test]
fn test_easy_scenario_cold_then_warm() {
    let mut session = session_with_secret(Difficulty::Easy, 25);

    let outcomes: Vec<GuessOutcome> = [5, 35, 25]
        .into_iter()
        .map(|g| *session.submit_guess(g).expect("Active session").outcome())
        .collect();

    assert_eq!(
        outcomes,
        [
            GuessOutcome::Hint(Hint::new(Proximity::Cold, Direction::Higher)),
            GuessOutcome::Hint(Hint::new(Proximity::Warm, Direction::Lower)),
            GuessOutcome::Win,
        ]
    );
    let err = session.submit_guess(1).unwrap_err();
    assert_eq!(err.to_string(), "Session is already over");
}

#[test]
fn test_hard_scenario_all_misses() {
    let mut session = session_with_secret(Difficulty::Hard, 100);
    for guess in 1..=5 {
        session.submit_guess(guess).expect("Active session");
    }
    assert_eq!(session.state(), SessionState::Lost);
    assert_eq!(session.attempts_used(), 5);
    assert!(!session.is_won());
}
