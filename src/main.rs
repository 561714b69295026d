//! Noughts - tic-tac-toe for the terminal
//!
//! Two players share one keyboard and mouse; the engine referees.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::UiConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        UiConfig::from_file(&cli.config)?
    } else {
        UiConfig::default()
    };

    // CLI override wins over the config file
    if let Some(log_file) = cli.log_file {
        config = UiConfig::new(log_file, *config.show_help(), *config.ascii_borders());
    }

    tui::run(config)
}
