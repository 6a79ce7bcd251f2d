//! Game session rules: scenarios plus property tests for the invariants
//! every round must keep no matter what is typed.

use std::collections::BTreeSet;

use gallows::games::hangman::session::{
    GameSession, GuessOutcome, IgnoreReason, SessionEvent, Status, PLACEHOLDER, STARTING_LIVES,
};
use gallows::Category;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn session_with(category: &Category, seed: u64) -> GameSession<StdRng> {
    let mut session = GameSession::with_rng(StdRng::seed_from_u64(seed));
    session.reset(Some(category));
    session
}

fn single(word: &str) -> Category {
    Category::new("Test", [word]).unwrap()
}

/// Everything observable about a session
fn snapshot(session: &GameSession<StdRng>) -> (String, BTreeSet<char>, u8, Status) {
    (
        session.masked_word(),
        session.guessed_letters().clone(),
        session.remaining_lives(),
        session.status(),
    )
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_cat_scenario() {
    let mut session = session_with(&single("CAT"), 1);
    assert_eq!(session.remaining_lives(), 7);

    let steps = [
        ('C', SessionEvent::CorrectGuess, "C _ _"),
        ('A', SessionEvent::CorrectGuess, "C A _"),
        ('T', SessionEvent::GameWon, "C A T"),
    ];
    for (letter, event, mask) in steps {
        assert_eq!(session.submit_guess(letter), Some(event));
        assert_eq!(session.masked_word(), mask);
    }

    assert_eq!(session.status(), Status::Won);
    assert_eq!(session.remaining_lives(), 7);
    assert!(session.incorrect_guesses().is_empty());
}

#[test]
fn test_dog_scenario() {
    let mut session = session_with(&single("DOG"), 1);

    for (i, letter) in ['X', 'Y', 'Z', 'Q', 'W', 'V', 'K'].into_iter().enumerate() {
        let event = session.submit_guess(letter);
        assert_eq!(session.remaining_lives(), STARTING_LIVES - 1 - i as u8);
        if i < 6 {
            assert_eq!(event, Some(SessionEvent::IncorrectGuess));
        } else {
            assert_eq!(event, Some(SessionEvent::GameLost));
        }
    }

    assert_eq!(session.remaining_lives(), 0);
    assert_eq!(session.status(), Status::Lost);
    assert_eq!(session.incorrect_guesses(), vec!['K', 'Q', 'V', 'W', 'X', 'Y', 'Z']);
    assert_eq!(session.masked_word(), "_ _ _");
}

#[test]
fn test_reset_mid_game() {
    let animals = Category::new("Animals", ["CAT", "DOG", "EMU", "YAK"]).unwrap();
    let mut session = session_with(&animals, 3);
    session.submit_guess('Q');
    session.submit_guess('J');
    assert!(session.remaining_lives() < STARTING_LIVES);

    session.reset(Some(&animals));

    assert!(session.guessed_letters().is_empty());
    assert_eq!(session.remaining_lives(), STARTING_LIVES);
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.category_name(), Some("Animals"));
    assert!(animals.words().contains(&session.target_word()));
}

#[test]
fn test_reset_after_loss_restarts() {
    let mut session = session_with(&single("OX"), 5);
    for letter in "ABCDEFG".chars() {
        session.submit_guess(letter);
    }
    assert_eq!(session.status(), Status::Lost);

    session.reset(Some(&single("OX")));
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.submit_guess('O'), Some(SessionEvent::CorrectGuess));
}

#[test]
fn test_every_word_can_be_drawn() {
    let category = Category::new("Birds", ["OWL", "JAY", "KIWI"]).unwrap();
    let mut session = GameSession::with_rng(StdRng::seed_from_u64(11));
    let mut seen = BTreeSet::new();

    for _ in 0..200 {
        session.reset(Some(&category));
        seen.insert(session.target_word());
    }

    let all: BTreeSet<String> = category.words().iter().cloned().collect();
    assert_eq!(seen, all);
}

#[test]
fn test_same_seed_same_word() {
    let category = Category::new("Birds", ["OWL", "JAY", "KIWI", "WREN", "ROBIN"]).unwrap();
    let a = session_with(&category, 42);
    let b = session_with(&category, 42);
    assert_eq!(a.target_word(), b.target_word());
}

#[test]
fn test_fresh_session_is_empty() {
    let session = GameSession::new();
    assert!(!session.is_active());
    assert_eq!(session.status(), Status::InProgress);
    assert_eq!(session.figure_stage(), 0);
}

#[test]
fn test_ignore_reasons_in_order() {
    let mut session = GameSession::with_rng(StdRng::seed_from_u64(0));
    assert_eq!(session.try_guess('1'), GuessOutcome::Ignored(IgnoreReason::NoWord));

    session.reset(Some(&single("A")));
    assert_eq!(session.try_guess('1'), GuessOutcome::Ignored(IgnoreReason::NotALetter));
    assert_eq!(session.try_guess('a'), GuessOutcome::Applied(SessionEvent::GameWon));
    assert_eq!(session.try_guess('1'), GuessOutcome::Ignored(IgnoreReason::GameOver));
    assert_eq!(session.try_guess('A'), GuessOutcome::Ignored(IgnoreReason::GameOver));
}

// =============================================================================
// Properties
// =============================================================================

fn guess() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => proptest::char::range('A', 'Z'),
        2 => proptest::char::range('a', 'z'),
        1 => any::<char>(),
    ]
}

fn word() -> impl Strategy<Value = String> {
    "[A-Z]{1,10}"
}

proptest! {
    #[test]
    fn prop_lives_only_go_down(word in word(), guesses in prop::collection::vec(guess(), 0..60)) {
        let mut session = session_with(&single(&word), 0);
        let mut lives = session.remaining_lives();

        for letter in guesses {
            session.submit_guess(letter);
            prop_assert!(session.remaining_lives() <= lives);
            prop_assert!(lives - session.remaining_lives() <= 1);
            lives = session.remaining_lives();
            prop_assert_eq!(session.status() == Status::Lost, lives == 0);
        }
    }

    #[test]
    fn prop_terminal_state_is_frozen(word in word(), guesses in prop::collection::vec(guess(), 0..80)) {
        let mut session = session_with(&single(&word), 0);
        let mut frozen = None;

        for letter in guesses {
            let event = session.submit_guess(letter);
            if let Some(before) = &frozen {
                prop_assert_eq!(event, None);
                prop_assert_eq!(&snapshot(&session), before);
            } else if session.status().is_terminal() {
                frozen = Some(snapshot(&session));
            }
        }
    }

    #[test]
    fn prop_repeat_guess_is_a_no_op(word in word(), guesses in prop::collection::vec(guess(), 1..30), at in any::<prop::sample::Index>()) {
        let mut once = session_with(&single(&word), 0);
        let mut twice = session_with(&single(&word), 0);
        let dup = at.index(guesses.len());

        for (i, letter) in guesses.iter().enumerate() {
            once.submit_guess(*letter);
            twice.submit_guess(*letter);
            if i == dup {
                prop_assert_eq!(twice.submit_guess(*letter), None);
            }
        }

        prop_assert_eq!(snapshot(&once), snapshot(&twice));
    }

    #[test]
    fn prop_mask_is_complete_exactly_when_won(word in word(), guesses in prop::collection::vec(guess(), 0..60)) {
        let mut session = session_with(&single(&word), 0);

        for letter in guesses {
            session.submit_guess(letter);
            let revealed: String = session.masked_word().split(' ').collect();
            let complete = !revealed.contains(PLACEHOLDER);
            prop_assert_eq!(complete, session.status() == Status::Won);
            if complete {
                prop_assert_eq!(&revealed, &word);
            }
        }
    }

    #[test]
    fn prop_at_most_one_ending(word in word(), guesses in prop::collection::vec(guess(), 0..80)) {
        let mut session = session_with(&single(&word), 0);
        let endings = guesses
            .into_iter()
            .filter_map(|letter| session.submit_guess(letter))
            .filter(|event| matches!(event, SessionEvent::GameWon | SessionEvent::GameLost))
            .count();
        prop_assert!(endings <= 1);
    }

    #[test]
    fn prop_misses_match_lives_lost(word in word(), guesses in prop::collection::vec(guess(), 0..60)) {
        let mut session = session_with(&single(&word), 0);
        for letter in guesses {
            session.submit_guess(letter);
        }

        let misses = session.incorrect_guesses();
        prop_assert_eq!(misses.len(), session.figure_stage() as usize);
        prop_assert!(misses.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(misses.iter().all(|c| !word.contains(*c)));
    }
}
