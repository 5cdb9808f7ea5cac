//! Main TUI application state and logic

use crate::driver::Ticker;
use crate::interpreter::shared::SharedEngine;
use crate::snapshot::EngineView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Redraw interval; also how long a keystroke can wait before being read
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Reset,
    /// A value for the engine if it is waiting; `q` doubles as quit otherwise
    Input(i64),
    Ignore,
}

impl KeyAction {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if ctrl => KeyAction::Quit,
            KeyCode::Char('r') if ctrl => KeyAction::Reset,
            KeyCode::Enter => KeyAction::Input(10),
            KeyCode::Tab => KeyAction::Input(9),
            KeyCode::Char(c) => KeyAction::Input(i64::from(u32::from(c))),
            _ => KeyAction::Ignore,
        }
    }
}

/// The main application state
pub struct App {
    /// Engine shared with the tick thread
    pub engine: SharedEngine,

    ticker: Ticker,

    /// Tick rate, kept so a reset can restart the tick source after a fault
    rate_hz: u32,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create the app and start ticking the engine
    pub fn new(engine: SharedEngine, rate_hz: u32) -> Self {
        let ticker = Ticker::start(engine.clone(), rate_hz);
        App {
            engine,
            ticker,
            rate_hz,
            should_quit: false,
            status_message: String::from("Running"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let view = self.engine.view();
            self.update_status(&view);
            terminal.draw(|f| self.render(f, &view))?;

            if self.should_quit {
                break;
            }

            if event::poll(FRAME_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.ticker.shutdown();
        Ok(())
    }

    fn update_status(&mut self, view: &EngineView) {
        if let Some(fault) = &view.fault {
            self.status_message = fault.to_string();
        } else if view.halted {
            self.status_message = format!("Halted after {} steps", view.dispatched);
        } else if view.blocked_on_input {
            self.status_message = "Waiting for a key".to_string();
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, view: &EngineView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Min(7),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(frame.area());

        super::panes::render_program_pane(frame, chunks[0], view);
        super::panes::render_tape_pane(frame, chunks[1], view);
        super::panes::render_output_pane(frame, chunks[2], &view.output);
        super::panes::render_status_bar(frame, chunks[3], &self.status_message, view);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match KeyAction::from_key(key) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Reset => self.reset(),
            KeyAction::Input(value) => {
                if self.engine.deliver_input(value) {
                    self.status_message = format!("Read {}", value);
                } else if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            KeyAction::Ignore => {}
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        if !self.ticker.is_running() {
            self.ticker = Ticker::start(self.engine.clone(), self.rate_hz);
        }
        self.status_message = "Reset".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            KeyAction::from_key(key(KeyCode::Esc, KeyModifiers::NONE)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            KeyAction::from_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            KeyAction::Reset
        );
        assert_eq!(
            KeyAction::from_key(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            KeyAction::Input(97)
        );
        assert_eq!(
            KeyAction::from_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            KeyAction::Input(10)
        );
        assert_eq!(
            KeyAction::from_key(key(KeyCode::Left, KeyModifiers::NONE)),
            KeyAction::Ignore
        );
    }
}
