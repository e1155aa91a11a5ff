//! Main application framework

use crate::input::{Action, event_to_action};
use crate::theme::Theme;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Application state trait
pub trait AppState {
    /// Handle an input action, return true to continue, false to quit
    fn handle_action(&mut self, action: Action) -> bool;

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame);

    /// Called once per tick interval (for animations)
    fn tick(&mut self) {}
}

/// Main application runner
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    tick_rate: Duration,
}

impl App {
    /// Create a new application
    pub fn new() -> io::Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            theme: Theme::default(),
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Set the color theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the tick rate for animations
    pub fn with_tick_rate(mut self, rate: Duration) -> Self {
        self.tick_rate = rate;
        self
    }

    /// Get the theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run the application with the given state.
    ///
    /// One cooperative loop: render, poll for input until the next tick
    /// deadline, then tick. Ticks fire at the tick rate regardless of how
    /// much input arrives, so animation frames keep their pacing.
    pub fn run<S: AppState>(&mut self, state: &mut S) -> io::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            // Render
            self.terminal.draw(|frame| {
                state.render(frame);
            })?;

            // Handle events until the tick deadline
            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                let evt = event::read()?;
                if let Event::Key(_) = &evt {
                    if let Some(action) = event_to_action(evt) {
                        if !state.handle_action(action) {
                            return Ok(());
                        }
                    }
                }
            }

            // Tick for animations
            if last_tick.elapsed() >= self.tick_rate {
                state.tick();
                last_tick = Instant::now();
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
