//! Main TUI application state and logic

use crate::ui::prompt::{AddCardPrompt, PromptOutcome};
use crate::viewer::Viewer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// Cards and cursor
    pub viewer: Viewer,

    /// Open "Add card" dialog, if any
    pub prompt: Option<AddCardPrompt>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app showing the viewer's current card
    pub fn new(viewer: Viewer) -> Self {
        App {
            viewer,
            prompt: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        super::panes::render_card_pane(
            frame,
            chunks[0],
            &self.viewer.card_view(),
            self.viewer.controls(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            &self.viewer.status_text(),
            self.viewer.state(),
            self.prompt.is_some(),
        );

        if let Some(prompt) = &self.prompt {
            super::panes::render_prompt_popup(frame, chunks[0], prompt);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The dialog is modal: it swallows every key while open
        if let Some(prompt) = self.prompt.as_mut() {
            match prompt.handle_key(key) {
                PromptOutcome::Pending => {}
                PromptOutcome::Cancelled => {
                    self.prompt = None;
                    self.status_message = "Add cancelled".to_string();
                }
                PromptOutcome::Completed { question, answer } => {
                    self.prompt = None;
                    self.add_card(&question, &answer);
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('b') => self.back(),
            KeyCode::Right | KeyCode::Char('n') => self.next(),
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => self.reveal(),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.prompt = Some(AddCardPrompt::new());
                self.status_message = "Adding a card".to_string();
            }
            _ => {}
        }
    }

    fn next(&mut self) {
        self.status_message = if self.viewer.next() {
            "Next card".to_string()
        } else {
            "Already at the last card".to_string()
        };
    }

    fn back(&mut self) {
        self.status_message = if self.viewer.back() {
            "Previous card".to_string()
        } else {
            "Already at the first card".to_string()
        };
    }

    fn reveal(&mut self) {
        if self.viewer.reveal() {
            self.status_message = "Answer shown".to_string();
        }
    }

    fn add_card(&mut self, question: &str, answer: &str) {
        self.status_message = if self.viewer.add_card(question, answer) {
            "Card added".to_string()
        } else {
            "Add cancelled".to_string()
        };
    }
}
