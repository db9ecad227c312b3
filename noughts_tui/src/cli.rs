//! Command-line interface for noughts_tui.

use clap::Parser;
use std::path::PathBuf;

/// Pass-the-device tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "noughts_tui")]
#[command(about = "Pass-the-device tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path for the tracing log file (stdout belongs to the UI).
    #[arg(long, default_value = "noughts_tui.log")]
    pub log_file: PathBuf,
}
