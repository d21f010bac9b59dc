// sortty: interactive sorting algorithm visualizer for the terminal

mod config;
mod model;
mod player;
mod sorts;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use player::Player;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    // Malformed configuration is fatal: the bar layout divides by the value
    // span, so we abort before touching the terminal.
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let player = match Player::new(config) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Failed to generate starting array: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}
