//! Command-line interface for the terminal UI.

use clap::Parser;
use std::path::PathBuf;

/// Tic-Tac-Toe - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
