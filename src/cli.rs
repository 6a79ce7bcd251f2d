use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::Level;

use gallows::core::audio::{AudioCue, Silent, SoundFiles, TerminalBell};
use gallows::games::hangman::category::{self, Category};

#[derive(Parser, Debug)]
#[command(name = "gallows")]
#[command(about = "Hangman in your terminal")]
#[command(version)]
pub struct Cli {
    /// JSON word lists to use instead of the built-in categories
    #[arg(long, value_name = "PATH")]
    pub categories: Option<PathBuf>,

    /// Skip the menu and start in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Directory with correct.wav, incorrect.wav, win.wav and lose.wav
    #[arg(long, value_name = "DIR")]
    pub sound_dir: Option<PathBuf>,

    /// Command used to play sound files
    #[arg(long, default_value = "aplay")]
    pub player: String,

    /// Ring the terminal bell on misses and at the end of a round
    #[arg(long)]
    pub bell: bool,

    /// Write logs to this file (the terminal is busy with the game)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl Cli {
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(self.log_level)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {}", e))
    }

    pub fn load_categories(&self) -> Result<Vec<Category>> {
        match &self.categories {
            Some(path) => category::load_categories(path),
            None => Ok(category::builtin()),
        }
    }

    pub fn audio(&self) -> Box<dyn AudioCue> {
        match (&self.sound_dir, self.bell) {
            (Some(dir), _) => Box::new(SoundFiles::new(dir, self.player.as_str())),
            (None, true) => Box::new(TerminalBell::new()),
            (None, false) => Box::new(Silent),
        }
    }
}
