//! TUI pane rendering modules
//!
//! Each pane is a stateless render function taking the frame, its area and
//! the data it draws.
//!
//! # Pane Modules
//!
//! - [`card`]: The flash card itself with question, controls, answer and position
//! - [`prompt`]: Popup for the "Add card" dialog
//! - [`status`]: Status bar with keybindings and the last action message
//! - `utils`: Markup to styled line conversion and layout helpers

mod utils;

pub mod card;
pub mod prompt;
pub mod status;

// Re-export render functions for convenience
pub use card::render_card_pane;
pub use prompt::render_prompt_popup;
pub use status::render_status_bar;
