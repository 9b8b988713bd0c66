//! Tracing setup
//!
//! The TUI owns the terminal, so log output goes to a file in the config
//! directory instead of stdout/stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppPaths, Settings};
use crate::error::{LedgerError, LedgerResult};

/// Build the log filter: `RUST_LOG` wins, otherwise the configured level
pub fn build_filter(settings: &Settings) -> LedgerResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(format!("coin_ledger={}", settings.log_level)).map_err(|e| {
        LedgerError::Config(format!("Invalid log level '{}': {}", settings.log_level, e))
    })
}

/// Install the global subscriber writing to the log file
pub fn init_tracing(paths: &AppPaths, settings: &Settings) -> LedgerResult<()> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            LedgerError::Io(format!("Failed to open log file {}: {}", log_path.display(), e))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::info!(log = %log_path.display(), "logging initialized");
    Ok(())
}
