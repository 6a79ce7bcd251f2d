mod cli;

use anyhow::Result;
use clap::Parser;
use gallows::core::engine::Engine;
use gallows::core::menu::CategoryPicker;
use gallows::GameSession;
use tracing::info;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;

    // 1. Word lists: built-in unless a file was given
    let categories = cli.load_categories()?;
    info!(count = categories.len(), source = ?cli.categories, "categories loaded");

    // 2. One session, owned by the engine for the life of the process
    let picker = CategoryPicker::new(categories)?;
    let mut engine = Engine::new(picker, GameSession::new(), cli.audio());
    if let Some(name) = &cli.category {
        engine.start_in(name)?;
    }

    // 3. Hand the terminal to the game and always give it back
    let mut terminal = ratatui::init();
    let result = engine.run(&mut terminal);
    ratatui::restore();
    result
}
