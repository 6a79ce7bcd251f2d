use std::collections::BTreeSet;

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::games::hangman::category::Category;

/// Lives a fresh session starts with; also the number of figure stages.
pub const STARTING_LIVES: u8 = 7;

/// Shown in place of a letter that has not been guessed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// What a successful guess did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    CorrectGuess,
    IncorrectGuess,
    GameWon,
    GameLost,
}

/// Why a guess left the session untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No category selected, so there is no word to guess
    NoWord,
    GameOver,
    NotALetter,
    AlreadyGuessed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Applied(SessionEvent),
    Ignored(IgnoreReason),
}

impl GuessOutcome {
    pub fn event(self) -> Option<SessionEvent> {
        match self {
            GuessOutcome::Applied(event) => Some(event),
            GuessOutcome::Ignored(_) => None,
        }
    }
}

/// How a single keyboard letter relates to the current word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unguessed,
    Hit,
    Miss,
}

/// One round of Hangman.
///
/// The session owns its random source so word selection can be made
/// deterministic by handing in a seeded RNG. Status is never stored; it is
/// derived from the word, the guesses and the lives left.
#[derive(Debug, Clone)]
pub struct GameSession<R = ThreadRng> {
    rng: R,
    category: Option<String>,
    word: Vec<char>,
    guessed: BTreeSet<char>,
    remaining_lives: u8,
}

impl GameSession<ThreadRng> {
    /// Empty session drawing words from the thread-local RNG
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for GameSession<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            category: None,
            word: Vec::new(),
            guessed: BTreeSet::new(),
            remaining_lives: STARTING_LIVES,
        }
    }

    /// Start over with a random word from `category`, or clear everything
    /// when no category is selected.
    pub fn reset(&mut self, category: Option<&Category>) {
        self.guessed.clear();
        self.remaining_lives = STARTING_LIVES;

        match category {
            Some(category) => {
                let words = category.words();
                let pick = self.rng.random_range(0..words.len());
                self.word = words[pick].chars().collect();
                self.category = Some(category.name().to_string());
                info!(category = category.name(), len = self.word.len(), "new word chosen");
            }
            None => {
                self.word.clear();
                self.category = None;
                debug!("session cleared");
            }
        }
    }

    /// Apply a guess, returning the event it produced.
    ///
    /// Anything that cannot be a fresh guess in a running game is a silent
    /// no-op and yields `None`. Use [`GameSession::try_guess`] to find out
    /// why a guess was ignored.
    pub fn submit_guess(&mut self, letter: char) -> Option<SessionEvent> {
        self.try_guess(letter).event()
    }

    pub fn try_guess(&mut self, letter: char) -> GuessOutcome {
        if self.word.is_empty() {
            return GuessOutcome::Ignored(IgnoreReason::NoWord);
        }
        if self.status().is_terminal() {
            return GuessOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::Ignored(IgnoreReason::NotALetter);
        }

        let letter = letter.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            return GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed);
        }

        let event = if self.word.contains(&letter) {
            if self.is_word_complete() {
                SessionEvent::GameWon
            } else {
                SessionEvent::CorrectGuess
            }
        } else {
            self.remaining_lives -= 1;
            if self.remaining_lives == 0 {
                SessionEvent::GameLost
            } else {
                SessionEvent::IncorrectGuess
            }
        };

        GuessOutcome::Applied(event)
    }

    fn is_word_complete(&self) -> bool {
        self.word.iter().all(|c| self.guessed.contains(c))
    }

    pub fn status(&self) -> Status {
        if self.remaining_lives == 0 {
            Status::Lost
        } else if !self.word.is_empty() && self.is_word_complete() {
            Status::Won
        } else {
            Status::InProgress
        }
    }

    /// Word with unknown letters hidden, one space between positions: `C _ T`
    pub fn masked_word(&self) -> String {
        let cells: Vec<String> = self
            .word
            .iter()
            .map(|c| {
                let shown = if self.guessed.contains(c) { *c } else { PLACEHOLDER };
                shown.to_string()
            })
            .collect();
        cells.join(" ")
    }

    /// Guessed letters that are not in the word, alphabetically
    pub fn incorrect_guesses(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.word.contains(c))
            .collect()
    }

    pub fn remaining_lives(&self) -> u8 {
        self.remaining_lives
    }

    /// How much of the figure to draw, 0 (bare gallows) to 7
    pub fn figure_stage(&self) -> u8 {
        STARTING_LIVES - self.remaining_lives
    }

    pub fn target_word(&self) -> String {
        self.word.iter().collect()
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True once a category has supplied a word
    pub fn is_active(&self) -> bool {
        !self.word.is_empty()
    }

    pub fn letter_state(&self, letter: char) -> LetterState {
        let letter = letter.to_ascii_uppercase();
        if !self.guessed.contains(&letter) {
            LetterState::Unguessed
        } else if self.word.contains(&letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    }
}
