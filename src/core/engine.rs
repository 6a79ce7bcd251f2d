use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info};

use crate::core::audio::AudioCue;
use crate::core::menu::{CategoryPicker, PickerRenderer};
use crate::core::renderer::Renderer;
use crate::games::hangman::keyboard::Keyboard;
use crate::games::hangman::renderer::{HangmanRenderer, PlayView};
use crate::games::hangman::session::{GameSession, GuessOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Picker,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the one session of this process and routes key presses to it.
///
/// Everything is synchronous: a key press is fully applied (and any sound
/// cue fired) before the next event is read.
pub struct Engine<R, A> {
    picker: CategoryPicker,
    session: GameSession<R>,
    keyboard: Keyboard,
    audio: A,
    screen: Screen,
}

impl<R: Rng, A: AudioCue> Engine<R, A> {
    pub fn new(picker: CategoryPicker, session: GameSession<R>, audio: A) -> Self {
        Self {
            picker,
            session,
            keyboard: Keyboard::new(),
            audio,
            screen: Screen::Picker,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn picker(&self) -> &CategoryPicker {
        &self.picker
    }

    /// Skip the picker and start a round in the named category
    pub fn start_in(&mut self, name: &str) -> Result<()> {
        self.picker.select_named(name)?;
        self.play_selected();
        Ok(())
    }

    fn play_selected(&mut self) {
        info!(category = self.picker.selected().name(), "category selected");
        self.session.reset(Some(self.picker.selected()));
        self.keyboard = Keyboard::new();
        self.screen = Screen::Playing;
    }

    fn back_to_picker(&mut self) {
        self.session.reset(None);
        self.keyboard = Keyboard::new();
        self.screen = Screen::Picker;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        match self.screen {
            Screen::Picker => self.handle_picker_key(key),
            Screen::Playing => {
                self.handle_play_key(key);
                Flow::Continue
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Up => self.picker.move_up(),
            KeyCode::Down => self.picker.move_down(),
            KeyCode::Enter => self.play_selected(),
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            _ => {}
        }
        Flow::Continue
    }

    fn handle_play_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('r') if ctrl => self.play_selected(),
            KeyCode::Esc => self.back_to_picker(),
            KeyCode::Left => self.keyboard.move_left(),
            KeyCode::Right => self.keyboard.move_right(),
            KeyCode::Up => self.keyboard.move_up(),
            KeyCode::Down => self.keyboard.move_down(),
            KeyCode::Enter if self.session.status().is_terminal() => self.play_selected(),
            KeyCode::Enter | KeyCode::Char(' ') => self.guess(self.keyboard.focused()),
            KeyCode::Char(c) if !ctrl => {
                self.keyboard.focus(c);
                self.guess(c);
            }
            _ => {}
        }
    }

    fn guess(&mut self, letter: char) {
        match self.session.try_guess(letter) {
            GuessOutcome::Applied(event) => {
                info!(%letter, ?event, lives = self.session.remaining_lives(), "guess");
                self.audio.play(event);
            }
            GuessOutcome::Ignored(reason) => {
                debug!(%letter, ?reason, "guess ignored");
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Picker => PickerRenderer::render(frame, &self.picker),
            Screen::Playing => HangmanRenderer::render(
                frame,
                &PlayView { session: &self.session, keyboard: &self.keyboard },
            ),
        }
    }

    /// Draw, wait for the next terminal event, apply it; until quit.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if self.handle_key(key) == Flow::Quit {
                    break;
                }
            }
        }
        Ok(())
    }
}
