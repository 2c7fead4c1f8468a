//! Error types for application setup
//!
//! Card operations never fail: lookups return `Option` and rejected input is
//! reported as a `false` return. The only real failures come from the
//! terminal and the optional log file.

use std::path::PathBuf;

/// Errors raised while starting or running the TUI
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal setup, drawing or event polling failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The log file could not be opened
    #[error("cannot open log file '{}': {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A global logger was already installed
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
