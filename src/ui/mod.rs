//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]** — event loop, key bindings, wiring of the dialog into the viewer
//! - **[`prompt`]** — the modal two-stage "Add card" dialog
//! - **[`panes`]** — stateless render functions (card, status bar, dialog popup)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Viewer`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Viewer`]: crate::viewer::Viewer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod prompt;
pub mod theme;

pub use app::App;
