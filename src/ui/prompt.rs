//! Two-stage "Add card" dialog
//!
//! The dialog first asks for the question, then for the answer. It never
//! touches the card store itself: it reports a [`PromptOutcome`] and the app
//! forwards a completed pair to [`Viewer::add_card`].
//!
//! [`Viewer::add_card`]: crate::viewer::Viewer::add_card

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const QUESTION_PROMPT: &str = "Enter the question:";
pub const ANSWER_PROMPT: &str = "Enter the answer:";

/// Which field the dialog is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStage {
    Question,
    /// The question has been accepted and is kept until the answer arrives
    Answer { question: String },
}

/// Result of feeding one key into the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still collecting input
    Pending,
    /// Escape pressed, or a blank question submitted
    Cancelled,
    Completed { question: String, answer: String },
}

/// Modal text prompt for a new card
#[derive(Debug, Clone)]
pub struct AddCardPrompt {
    stage: PromptStage,
    input: String,
}

impl AddCardPrompt {
    pub fn new() -> Self {
        AddCardPrompt {
            stage: PromptStage::Question,
            input: String::new(),
        }
    }

    pub fn stage(&self) -> &PromptStage {
        &self.stage
    }

    /// Text typed so far for the current stage
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn label(&self) -> &'static str {
        match self.stage {
            PromptStage::Question => QUESTION_PROMPT,
            PromptStage::Answer { .. } => ANSWER_PROMPT,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Esc => PromptOutcome::Cancelled,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
                PromptOutcome::Pending
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        }
    }

    fn submit(&mut self) -> PromptOutcome {
        let input = std::mem::take(&mut self.input);
        match std::mem::replace(&mut self.stage, PromptStage::Question) {
            PromptStage::Question => {
                if input.trim().is_empty() {
                    return PromptOutcome::Cancelled;
                }
                self.stage = PromptStage::Answer { question: input };
                PromptOutcome::Pending
            }
            // The answer may be empty; only cancellation discards the card
            PromptStage::Answer { question } => PromptOutcome::Completed {
                question,
                answer: input,
            },
        }
    }
}

impl Default for AddCardPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(prompt: &mut AddCardPrompt, text: &str) {
        for c in text.chars() {
            assert_eq!(prompt.handle_key(key(KeyCode::Char(c))), PromptOutcome::Pending);
        }
    }

    #[test]
    fn test_full_entry() {
        let mut prompt = AddCardPrompt::new();
        assert_eq!(prompt.label(), QUESTION_PROMPT);

        type_text(&mut prompt, "Q?");
        assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptOutcome::Pending);
        assert_eq!(prompt.label(), ANSWER_PROMPT);
        assert_eq!(prompt.input(), "");

        type_text(&mut prompt, "A!");
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            PromptOutcome::Completed {
                question: "Q?".to_string(),
                answer: "A!".to_string()
            }
        );
    }

    #[test]
    fn test_blank_question_cancels() {
        let mut prompt = AddCardPrompt::new();
        type_text(&mut prompt, "   ");
        assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptOutcome::Cancelled);
    }

    #[test]
    fn test_escape_on_answer_cancels() {
        let mut prompt = AddCardPrompt::new();
        type_text(&mut prompt, "Q");
        prompt.handle_key(key(KeyCode::Enter));
        type_text(&mut prompt, "A");
        assert_eq!(prompt.handle_key(key(KeyCode::Esc)), PromptOutcome::Cancelled);
    }

    #[test]
    fn test_empty_answer_allowed() {
        let mut prompt = AddCardPrompt::new();
        type_text(&mut prompt, "Q");
        prompt.handle_key(key(KeyCode::Enter));
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            PromptOutcome::Completed {
                question: "Q".to_string(),
                answer: String::new()
            }
        );
    }

    #[test]
    fn test_backspace() {
        let mut prompt = AddCardPrompt::new();
        type_text(&mut prompt, "abc");
        prompt.handle_key(key(KeyCode::Backspace));
        assert_eq!(prompt.input(), "ab");
        prompt.handle_key(key(KeyCode::Backspace));
        prompt.handle_key(key(KeyCode::Backspace));
        prompt.handle_key(key(KeyCode::Backspace));
        assert_eq!(prompt.input(), "");
    }
}
