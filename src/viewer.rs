//! Card viewer state machine
//!
//! The [`Viewer`] owns the [`CardStore`] together with a cursor into it and
//! decides which card is shown, whether its answer is visible, and which
//! controls are usable. Every user action maps to one method here; the UI
//! layer only forwards events and renders the result.
//!
//! ```text
//!            add_card                 next / back / add_card
//!   Empty ───────────► Showing(i, false) ◄──────────────────┐
//!                            │                              │
//!                            │ reveal                       │
//!                            ▼                              │
//!                      Showing(i, true) ────────────────────┘
//! ```

use crate::markup;
use crate::store::CardStore;

/// Question line shown when the store has no cards
pub const NO_CARDS_TEXT: &str = "(no cards)";

/// Observable state of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Empty,
    Showing { index: usize, revealed: bool },
}

/// Which controls are currently usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub back: bool,
    pub reveal: bool,
    pub next: bool,
    pub add: bool,
}

/// Markup ready to be drawn on a rich-text surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub question: String,
    /// `None` until the answer is revealed
    pub answer: Option<String>,
    pub status: String,
}

/// Cursor and reveal flag over a card store
#[derive(Debug, Clone)]
pub struct Viewer {
    store: CardStore,
    index: usize,
    revealed: bool,
}

impl Viewer {
    /// Create a viewer positioned on the first card with its answer hidden
    pub fn new(store: CardStore) -> Self {
        let mut viewer = Viewer {
            store,
            index: 0,
            revealed: false,
        };
        viewer.show(0);
        viewer
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn state(&self) -> ViewState {
        if self.store.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Showing {
                index: self.index,
                revealed: self.revealed,
            }
        }
    }

    pub fn controls(&self) -> Controls {
        match self.state() {
            ViewState::Empty => Controls {
                back: false,
                reveal: false,
                next: false,
                add: true,
            },
            ViewState::Showing { index, revealed } => Controls {
                back: index > 0,
                reveal: !revealed,
                next: index + 1 < self.store.len(),
                add: true,
            },
        }
    }

    /// Move to the following card. Returns `false` when already on the last one.
    pub fn next(&mut self) -> bool {
        if !self.controls().next {
            return false;
        }
        self.show(self.index + 1);
        log::debug!("next: now on card {}", self.index);
        true
    }

    /// Move to the preceding card. Returns `false` when already on the first one.
    pub fn back(&mut self) -> bool {
        if !self.controls().back {
            return false;
        }
        self.show(self.index - 1);
        log::debug!("back: now on card {}", self.index);
        true
    }

    /// Reveal the current answer. One-shot until the next navigation.
    pub fn reveal(&mut self) -> bool {
        if !self.controls().reveal {
            return false;
        }
        self.revealed = true;
        log::debug!("reveal: card {}", self.index);
        true
    }

    /// Append a card and jump to it.
    ///
    /// The question is trimmed before it is stored; a blank question discards
    /// the action. The answer is stored as given and may be empty.
    pub fn add_card(&mut self, question: &str, answer: &str) -> bool {
        let question = question.trim();
        if question.is_empty() {
            log::debug!("add_card: blank question discarded");
            return false;
        }
        self.store.append(question, answer);
        self.show(self.store.len() - 1);
        log::info!("added card {} of {}", self.index + 1, self.store.len());
        true
    }

    /// Position indicator, e.g. `Card 2 / 5`
    pub fn status_text(&self) -> String {
        match self.state() {
            ViewState::Empty => "Card 0 / 0".to_string(),
            ViewState::Showing { index, .. } => {
                format!("Card {} / {}", index + 1, self.store.len())
            }
        }
    }

    /// Display markup for the current state, with card text escaped
    pub fn card_view(&self) -> CardView {
        let status = self.status_text();
        match self.state() {
            ViewState::Empty => CardView {
                question: markup::bold(NO_CARDS_TEXT),
                answer: None,
                status,
            },
            ViewState::Showing { index, revealed } => {
                let question = self.store.question(index).unwrap_or_default();
                let answer = if revealed {
                    let answer = self.store.answer(index).unwrap_or_default();
                    Some(format!("{}{}", markup::bold("A: "), markup::escape(answer)))
                } else {
                    None
                };
                CardView {
                    question: format!("{}{}", markup::bold("Q: "), markup::escape(question)),
                    answer,
                    status,
                }
            }
        }
    }

    /// Clamp `index` into the store and hide the answer
    fn show(&mut self, index: usize) {
        self.index = index.min(self.store.len().saturating_sub(1));
        self.revealed = false;
    }
}
