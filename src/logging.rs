//! Optional file logging
//!
//! The TUI takes over the terminal, so log records cannot go to stderr while
//! it runs. Logging is only enabled when a file is given.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::Path;

/// Install an `env_logger` that appends to `path`.
///
/// `RUST_LOG`, when set, overrides `level`.
pub fn init_file_logger(path: &Path, level: log::LevelFilter) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env(env_logger::Env::default())
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
