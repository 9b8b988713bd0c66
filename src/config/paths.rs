//! Path management for coin-ledger
//!
//! Resolves where settings and the log file live. The ledger file itself is
//! always given on the command line.
//!
//! ## Path Resolution Order
//!
//! 1. `--config-dir` flag or `COIN_LEDGER_CONFIG_DIR` environment variable
//! 2. The platform config directory from `directories` (e.g.
//!    `~/.config/coin-ledger` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Manages all paths used by coin-ledger
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl AppPaths {
    /// Create a new AppPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the platform config
    /// directory cannot be determined.
    pub fn new(override_dir: Option<PathBuf>) -> Result<Self, LedgerError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "coin-ledger")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine a configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("coin-ledger.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::new(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("coin-ledger.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().join("nested").join("cfg"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
