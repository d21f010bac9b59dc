//! Main TUI application: key handling and frame pacing

use crate::player::{Command, Player};
use crate::sorts::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::time::{Duration, Instant};

/// The application shell around the playback driver.
///
/// One iteration of [`App::run`] is one tick: draw the current state, drain
/// pending key events until the tick deadline, then advance the player once.
/// The tick rate is the adjustable speed while a sort is running and the
/// configured idle rate otherwise.
pub struct App {
    player: Player,
    should_quit: bool,
    last_tick: Instant,
}

impl App {
    pub fn new(player: Player) -> Self {
        App {
            player,
            should_quit: false,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI event loop until quit.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let fps = if self.player.is_running() {
                self.player.speed()
            } else {
                self.player.config().idle_fps
            };
            let tick_len = Duration::from_secs_f64(1.0 / fps.max(1) as f64);

            // Drain every pending key event, in order, until the deadline.
            loop {
                let timeout = tick_len.saturating_sub(self.last_tick.elapsed());
                if timeout.is_zero() || self.should_quit {
                    break;
                }
                if event::poll(timeout)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            self.handle_key_event(key)?;
                        }
                    }
                } else {
                    break;
                }
            }

            if !self.should_quit {
                self.player.tick();
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Render the UI: header, bar chart, status bar.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_header_pane(
            frame,
            chunks[0],
            self.player.algorithm().name(),
            self.player.ascending(),
            self.player.speed(),
        );

        super::panes::render_chart_pane(
            frame,
            chunks[1],
            self.player.array(),
            self.player.highlights(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            self.player.is_running(),
            self.player.elapsed(),
            self.player.speed(),
        );
    }

    /// Map a key press to a driver command. Unknown keys are ignored; the
    /// driver itself ignores commands that are invalid in its current state.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<(), Box<dyn std::error::Error>> {
        let command = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
            KeyCode::Char(' ') => Command::StartSort,
            KeyCode::Char('a') | KeyCode::Char('A') => Command::SetDirection(true),
            KeyCode::Char('d') | KeyCode::Char('D') => Command::SetDirection(false),
            KeyCode::Char('b') | KeyCode::Char('B') => {
                Command::SelectAlgorithm(Algorithm::Bubble)
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                Command::SelectAlgorithm(Algorithm::Insertion)
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                Command::SelectAlgorithm(Algorithm::Selection)
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                Command::SelectAlgorithm(Algorithm::Merge)
            }
            KeyCode::Char('+') | KeyCode::Char('=') => Command::SpeedUp,
            KeyCode::Char('-') => Command::SpeedDown,
            _ => return Ok(()),
        };

        self.player.apply(command)?;
        Ok(())
    }
}
