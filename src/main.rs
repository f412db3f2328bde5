//! Contact Book - Main entry point
//!
//! Starts the interactive menus on stdin/stdout. Diagnostics go to stderr.

use anyhow::Result;
use contact_book::{Config, InMemoryContactRepository, Navigator, StdConsole};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let (config, rejected) = Config::from_env_or_default();

    // Initialize logging (stderr only, stdout carries the dialogue)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match rejected {
        Some(e) => warn!("Ignoring configuration, using defaults: {}", e),
        None => info!("Configuration loaded successfully"),
    }

    info!(log_level = %config.log_level, "Starting contact book");

    let mut repo = InMemoryContactRepository::new();
    let mut console = StdConsole::stdio();

    Navigator::new(&mut repo, &mut console).run()?;

    info!("Contact book shutdown complete");
    Ok(())
}
