//! # Introduction
//!
//! A small flash-card study tool. Cards are question/answer pairs kept in
//! memory; a terminal UI built with [ratatui](https://docs.rs/ratatui) shows
//! one card at a time, reveals its answer on request, and lets the user append
//! new cards.
//!
//! ## Layers
//!
//! ```text
//! CardStore → Viewer → CardView (markup) → TUI
//! ```
//!
//! 1. [`store`] — append-only list of [`store::Card`]s with bounds-checked lookups.
//! 2. [`viewer`] — the `Empty` / `Showing` state machine over the store.
//! 3. [`markup`] — escaping and the tiny `<b>`/`<i>` tag language used for display.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Nothing is persisted: cards live for the lifetime of the process.

pub mod cli;
pub mod error;
pub mod logging;
pub mod markup;
pub mod store;
pub mod ui;
pub mod viewer;

pub use error::{Error, Result};
