//! File logging setup
//!
//! Wires the `log` facade to a file under the user cache directory. Logging
//! is opt-in through the `[logging]` config section; the TUI owns the
//! terminal, so log output never goes to stdout.

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::config::LoggingConfig;

/// Errors that can occur while setting up logging
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Could not determine cache directory")]
    NoCacheDir,
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to install logger: {0}")]
    Init(#[from] log::SetLoggerError),
}

static INIT: OnceCell<()> = OnceCell::new();

/// Path of the log file under the user cache directory
pub fn log_file_path() -> Result<PathBuf, LoggerError> {
    let cache_dir = dirs::cache_dir().ok_or(LoggerError::NoCacheDir)?;
    Ok(cache_dir.join("taskpad").join("taskpad.log"))
}

/// Initialize file logging according to configuration
///
/// Does nothing when logging is disabled. Safe to call more than once; only
/// the first call installs the logger.
pub fn init(config: &LoggingConfig) -> Result<(), LoggerError> {
    if !config.enabled {
        return Ok(());
    }

    INIT.get_or_try_init(|| {
        let path = log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ));
            })
            .level(log::LevelFilter::Info)
            .chain(fern::log_file(path)?)
            .apply()?;

        Ok(())
    })
    .map(|_| ())
}
