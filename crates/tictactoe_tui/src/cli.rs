//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal. Click a cell or use the keyboard.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Input poll interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,
}
