use anyhow::{Context, Result};

use taskpad::config::Config;
use taskpad::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    logger::init(&config.logging).context("Failed to initialize logging")?;

    log::info!("Starting taskpad {}", env!("CARGO_PKG_VERSION"));

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
