//! Tic-tac-toe terminal game.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_tui::{
    App, UiConfig, install_panic_hook, restore_terminal, run_app, setup_terminal,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config)?;

    info!(tick_ms = *config.tick_ms(), "Starting tic-tac-toe");

    let app = App::new(&config)?;
    install_panic_hook();
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    let res = run_app(&mut terminal, app, Duration::from_millis(*config.tick_ms()));

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Reads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<UiConfig> {
    let mut config = UiConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file.clone());
    }
    if let Some(tick_ms) = cli.tick_ms {
        config = config.with_tick_ms(tick_ms);
    }
    config.validate()?;
    Ok(config)
}

/// Sends tracing output to the log file so it does not disturb the UI.
fn init_tracing(config: &UiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
