//! Sound cues for session events.
//!
//! Audio is best effort: a cue that cannot play (missing file, no player
//! binary, closed terminal) logs at debug level and carries on. Nothing here
//! can change the state of a game.

use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::games::hangman::session::SessionEvent;

/// Something that reacts audibly to game events
pub trait AudioCue {
    fn play(&mut self, event: SessionEvent);
}

impl<A: AudioCue + ?Sized> AudioCue for Box<A> {
    fn play(&mut self, event: SessionEvent) {
        (**self).play(event)
    }
}

/// No sound at all
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioCue for Silent {
    fn play(&mut self, _event: SessionEvent) {}
}

/// Rings the terminal bell, more often for bigger moments
pub struct TerminalBell<W = Stdout> {
    out: W,
}

impl TerminalBell<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalBell<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings(event: SessionEvent) -> usize {
        match event {
            SessionEvent::CorrectGuess => 0,
            SessionEvent::IncorrectGuess => 1,
            SessionEvent::GameWon => 2,
            SessionEvent::GameLost => 3,
        }
    }
}

impl<W: Write> AudioCue for TerminalBell<W> {
    fn play(&mut self, event: SessionEvent) {
        let rings = Self::rings(event);
        if rings == 0 {
            return;
        }
        let bells = "\x07".repeat(rings);
        if let Err(e) = self.out.write_all(bells.as_bytes()).and_then(|_| self.out.flush()) {
            debug!(error = ?e, "terminal bell failed");
        }
    }
}

/// Plays one sound file per event through an external player command.
///
/// Players are not waited on. Finished ones are reaped on the next cue, so a
/// long game never piles up exited children.
#[derive(Debug)]
pub struct SoundFiles {
    dir: PathBuf,
    player: String,
    running: Vec<Child>,
}

impl SoundFiles {
    pub fn new(dir: impl Into<PathBuf>, player: impl Into<String>) -> Self {
        Self { dir: dir.into(), player: player.into(), running: Vec::new() }
    }

    pub fn file_name(event: SessionEvent) -> &'static str {
        match event {
            SessionEvent::CorrectGuess => "correct.wav",
            SessionEvent::IncorrectGuess => "incorrect.wav",
            SessionEvent::GameWon => "win.wav",
            SessionEvent::GameLost => "lose.wav",
        }
    }

    pub fn path_for(&self, event: SessionEvent) -> PathBuf {
        self.dir.join(Self::file_name(event))
    }

    /// Start the player for `event`, reporting why it could not start.
    pub fn try_play(&mut self, event: SessionEvent) -> io::Result<()> {
        self.reap();

        let path = self.path_for(event);
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("sound file {} missing", path.display()),
            ));
        }

        let child = Command::new(&self.player)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        self.running.push(child);
        Ok(())
    }

    /// Collect players that have exited; returns how many are still running.
    pub fn reap(&mut self) -> usize {
        self.running.retain_mut(|child| match child.try_wait() {
            Ok(Some(_)) => false,
            Ok(None) => true,
            Err(e) => {
                debug!(error = ?e, "lost track of sound player");
                false
            }
        });
        self.running.len()
    }
}

impl AudioCue for SoundFiles {
    fn play(&mut self, event: SessionEvent) {
        if let Err(e) = self.try_play(event) {
            debug!(player = %self.player, ?event, error = %e, "sound cue skipped");
        }
    }
}
