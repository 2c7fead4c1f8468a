// Flash Cards: terminal flash-card study tool

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use flashcards::cli::Cli;
use flashcards::logging;
use flashcards::store::CardStore;
use flashcards::ui::App;
use flashcards::viewer::Viewer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path, cli.log_level)?;
    }

    let store = if cli.empty {
        CardStore::new()
    } else {
        CardStore::with_samples()
    };
    log::info!("starting with {} card(s)", store.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Viewer::new(store));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("event loop failed: {}", err);
        return Err(flashcards::Error::from(err).into());
    }

    log::info!("exiting with {} card(s)", app.viewer.store().len());
    Ok(())
}
