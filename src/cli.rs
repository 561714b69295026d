//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - Tic-tac-toe with touch-style terminal controls
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with touch-style terminal controls", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Override the configured log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
