//! Color theme
//!
//! Built once from [`ThemeSettings`] and handed to the app, so rendering
//! never reaches for global style state.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeSettings;
use crate::error::{LedgerError, LedgerResult};

/// Resolved colors used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub title_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Indexed(83),
            muted: Color::Indexed(240),
            error: Color::Red,
            title_fg: Color::Black,
        }
    }
}

fn parse_color(field: &str, value: &str) -> LedgerResult<Color> {
    Color::from_str(value)
        .map_err(|_| LedgerError::Config(format!("Invalid theme color for {}: '{}'", field, value)))
}

impl Theme {
    /// Parse the configured color strings
    pub fn from_settings(settings: &ThemeSettings) -> LedgerResult<Self> {
        Ok(Self {
            accent: parse_color("accent", &settings.accent)?,
            muted: parse_color("muted", &settings.muted)?,
            error: parse_color("error", &settings.error)?,
            title_fg: parse_color("title_fg", &settings.title_fg)?,
        })
    }

    /// Focused control
    pub fn focused(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Blurred control, placeholders and help text
    pub fn blurred(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Section titles ("Balance", "Add New Transaction")
    pub fn title(&self) -> Style {
        Style::default().fg(self.title_fg).bg(self.accent)
    }

    /// Error messages
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_default_theme() {
        let theme = Theme::from_settings(&ThemeSettings::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_named_and_hex_colors() {
        let settings = ThemeSettings {
            accent: "cyan".into(),
            muted: "#808080".into(),
            ..ThemeSettings::default()
        };
        let theme = Theme::from_settings(&settings).unwrap();
        assert_eq!(theme.accent, Color::Cyan);
        assert_eq!(theme.muted, Color::Rgb(0x80, 0x80, 0x80));
    }

    #[test]
    fn test_invalid_color_is_config_error() {
        let settings = ThemeSettings {
            error: "not-a-color".into(),
            ..ThemeSettings::default()
        };
        let err = Theme::from_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("error"));
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
