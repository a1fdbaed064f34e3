//! Contact Book - Main entry point
//!
//! Runs the assistant with a line editor when stdin is a terminal and as a
//! plain line loop when input is piped. Logs go to stderr so they never
//! interleave with the conversation.

use anyhow::Result;
use contact_book::{run_interactive, run_session, Config, JsonFileRepository, SessionOptions};
use std::io::{self, IsTerminal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact book with data file: {}",
        config.data_file.display()
    );

    let repository = JsonFileRepository::new(config.data_file.clone());
    let options = SessionOptions {
        window_days: config.birthday_window_days,
    };

    let today = || chrono::Local::now().date_naive();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        run_interactive(&repository, today, options)?;
    } else {
        run_session(stdin.lock(), io::stdout(), &repository, today, options)?;
    }

    info!("Contact book shutdown complete");
    Ok(())
}
