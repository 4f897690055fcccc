//! tictactoe_tui - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_tui::{GameConfig, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    tui::init_file_logging(config.log_file())?;
    info!(config_path = %cli.config.display(), "Configuration resolved");

    tui::run_tui(config.session_settings())
}
