use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;

mod app;
mod commands;
mod keymap;
mod logger;
mod scene;
mod terminal_renderer;

use game_console_config::ConsoleConfig;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting game-console-demo, logging to {}", log_file.display());

    let config = app::cell_layout(ConsoleConfig::load());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app::run(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {:#}", err);
        log::error!("Demo failed: {:#}", err);
    }

    log::info!("Exiting game-console-demo");
    result
}
