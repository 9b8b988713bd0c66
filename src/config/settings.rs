//! User settings for coin-ledger
//!
//! Manages preferences: UI tick rate, log level and the color theme.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::LedgerError;

/// Color names for the theme
///
/// Each value is anything ratatui's `Color` parses: a name (`"red"`), an
/// ANSI index (`"83"`) or a hex code (`"#00ff5f"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Highlight color for focused controls and titles
    pub accent: String,
    /// Color for blurred controls and help text
    pub muted: String,
    /// Color for validation and write errors
    pub error: String,
    /// Text color on top of the accent background
    pub title_fg: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            accent: "83".to_string(),
            muted: "240".to_string(),
            error: "red".to_string(),
            title_fg: "black".to_string(),
        }
    }
}

/// User settings for coin-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Milliseconds between UI ticks (cursor blink, notification expiry)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default log filter level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Color theme
    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            theme: ThemeSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values the event loop cannot run with
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.tick_rate_ms == 0 {
            return Err(LedgerError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate_ms, 500);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.theme.accent, "83");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.tick_rate_ms, 500);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.tick_rate_ms = 250;
        settings.theme.accent = "cyan".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.tick_rate_ms, 250);
        assert_eq!(loaded.theme.accent, "cyan");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"theme":{"muted":"gray"}}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.tick_rate_ms, 500);
        assert_eq!(loaded.theme.muted, "gray");
        assert_eq!(loaded.theme.accent, "83");
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"tick_rate_ms":0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "tick_rate_ms = 3").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
