pub mod core {
    pub mod audio;
    pub mod engine;
    pub mod menu;
    pub mod renderer;
}

pub mod games;

// Re-export for convenience
pub use crate::core::engine::{Engine, Flow, Screen};
pub use crate::games::hangman::{Category, GameSession, SessionEvent, Status};
