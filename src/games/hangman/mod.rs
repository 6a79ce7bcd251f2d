/// Hangman: the session rules plus the pieces the play screen is drawn from
pub mod category;
pub mod figure;
pub mod keyboard;
pub mod renderer;
pub mod session;

pub use category::Category;
pub use keyboard::Keyboard;
pub use renderer::{HangmanRenderer, PlayView};
pub use session::{GameSession, GuessOutcome, IgnoreReason, LetterState, SessionEvent, Status, STARTING_LIVES};
