//! Persistent user settings.
//!
//! Settings live in a single `config.toml`. Every table and field is optional
//! on disk; missing entries fall back to the defaults below, and a file that
//! parses but holds invalid values is rejected as a whole.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_COPIED_MS, DEFAULT_GROUP_NAME,
};
use crate::models::RgbColor;

/// Which chrome theme the TUI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Follow the OS setting
    #[default]
    Auto,
    /// Dark chrome
    Dark,
    /// Light chrome
    Light,
}

impl ThemeMode {
    /// Parses a user-supplied mode name ("auto", "dark", "light"), case-insensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// `[ui]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Open the help overlay when the TUI starts
    #[serde(default)]
    pub show_help_on_startup: bool,
    /// Chrome theme
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// `[palette]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Base color shown on startup
    #[serde(default)]
    pub default_color: RgbColor,
    /// Group name used in the exported snippet (`'primary': { ... }`)
    #[serde(default = "default_group_name")]
    pub group_name: String,
}

fn default_group_name() -> String {
    DEFAULT_GROUP_NAME.to_string()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_color: RgbColor::default(),
            group_name: default_group_name(),
        }
    }
}

/// `[feedback]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// How long the "Copied" indicator stays visible, in milliseconds
    #[serde(default = "default_copied_ms")]
    pub copied_ms: u64,
}

const fn default_copied_ms() -> u64 {
    DEFAULT_COPIED_MS
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            copied_ms: DEFAULT_COPIED_MS,
        }
    }
}

impl FeedbackConfig {
    /// Indicator window as a `Duration`.
    #[must_use]
    pub const fn window(&self) -> Duration {
        Duration::from_millis(self.copied_ms)
    }
}

/// All user settings.
///
/// Stored at `<platform config dir>/Shadesmith/config.toml`, or under
/// `$SHADESMITH_CONFIG_DIR` when that is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `[ui]`
    #[serde(default)]
    pub ui: UiConfig,
    /// `[palette]`
    #[serde(default)]
    pub palette: PaletteConfig,
    /// `[feedback]`
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

impl Config {
    /// Same as `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the config and log files.
    pub fn config_dir() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => dirs::config_dir()
                .map(|base| base.join(CONFIG_DIR_NAME))
                .context("No platform config directory available"),
        }
    }

    /// Path of `config.toml` inside [`Config::config_dir`].
    pub fn config_file_path() -> Result<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Reads the settings file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates, then replaces the settings file.
    ///
    /// The file is written next to its final path and renamed into place, so
    /// an interrupted save leaves the previous file intact.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir).with_context(|| format!("Cannot create {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Cannot serialize settings")?;
        replace_file(&dir.join(CONFIG_FILE_NAME), &content)
    }

    /// Rejects a blank, padded or quoted group name and a zero copied window.
    pub fn validate(&self) -> Result<()> {
        let group = self.palette.group_name.trim();
        if group.is_empty() {
            bail!("Palette group name must not be empty");
        }
        if group != self.palette.group_name {
            bail!("Palette group name must not have leading or trailing whitespace");
        }
        if group.contains('\'') {
            bail!("Palette group name must not contain quotes: {group}");
        }
        if self.feedback.copied_ms == 0 {
            bail!("Copied indicator duration must be greater than 0 ms");
        }
        Ok(())
    }
}

fn replace_file(path: &Path, content: &str) -> Result<()> {
    let staging = path.with_extension("toml.tmp");
    fs::write(&staging, content).with_context(|| format!("Cannot write {}", staging.display()))?;
    fs::rename(&staging, path).with_context(|| format!("Cannot replace {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(!config.ui.show_help_on_startup);
        assert_eq!(config.palette.default_color.to_css_hex(), "#2563eb");
        assert_eq!(config.palette.group_name, "primary");
        assert_eq!(config.feedback.window(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }
    #[test]
    fn test_config_from_partial_toml() {
        let config = Config::from_toml(
            r##"
            [palette]
            default_color = "#E63946"
            "##,
        )
        .unwrap();
        assert_eq!(config.palette.default_color, RgbColor::new(0xe6, 0x39, 0x46));
        assert_eq!(config.palette.group_name, "primary");
        assert_eq!(config.feedback.copied_ms, 2000);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_color() {
        let result = Config::from_toml(
            r##"
            [palette]
            default_color = "#12"
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validate_group_name() {
        let mut config = Config::new();
        config.palette.group_name = "   ".to_string();
        assert!(config.validate().is_err());

        config.palette.group_name = "bra'nd".to_string();
        assert!(config.validate().is_err());

        config.palette.group_name = "  brand  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("whitespace"));
        assert!(config.save().is_err());

        config.palette.group_name = "brand".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_feedback_window() {
        let mut config = Config::new();
        config.feedback.copied_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.palette.default_color = RgbColor::new(0x10, 0xb9, 0x81);
        config.palette.group_name = "accent".to_string();

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("default_color = \"#10b981\""));
        let parsed = Config::from_toml(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_theme_mode_parse() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("AUTO"), Some(ThemeMode::Auto));
        assert_eq!(ThemeMode::parse("sepia"), None);
    }
}
