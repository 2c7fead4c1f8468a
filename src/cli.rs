//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flashcards", about = "Page through flash cards in the terminal", version)]
pub struct Cli {
    /// Start with no sample cards
    #[arg(long)]
    pub empty: bool,

    /// Write log output to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: log::LevelFilter,
}
