//! Configuration management CLI commands.

use crate::cli::common::{load_config, parse_color, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Base color shown on startup
    #[arg(long, value_name = "HEX")]
    default_color: Option<String>,

    /// Group name used in exported snippets
    #[arg(long, value_name = "NAME")]
    group: Option<String>,

    /// How long "Copied" stays visible, in milliseconds
    #[arg(long, value_name = "MS")]
    copied_ms: Option<u64>,

    /// Open the help overlay on startup (true or false)
    #[arg(long, value_name = "BOOL")]
    show_help_on_startup: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    ui: UiOutput,
    palette: PaletteOutput,
    feedback: FeedbackOutput,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    default_color: String,
    group_name: String,
}

#[derive(Serialize, Debug)]
struct FeedbackOutput {
    copied_ms: u64,
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.default_color.is_none()
            && self.group.is_none()
            && self.copied_ms.is_none()
            && self.show_help_on_startup.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --default-color, --group, --copied-ms, or --show-help-on-startup",
            ));
        }

        let mut config = load_config()?;

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(color) = &self.default_color {
            config.palette.default_color = parse_color(color)?;
        }

        if let Some(group) = &self.group {
            config.palette.group_name = group.trim().to_string();
        }

        if let Some(ms) = self.copied_ms {
            config.feedback.copied_ms = ms;
        }

        if let Some(show) = self.show_help_on_startup {
            config.ui.show_help_on_startup = show;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        tracing::info!("configuration updated");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            show_help_on_startup: config.ui.show_help_on_startup,
        },
        palette: PaletteOutput {
            default_color: config.palette.default_color.to_css_hex(),
            group_name: config.palette.group_name.clone(),
        },
        feedback: FeedbackOutput {
            copied_ms: config.feedback.copied_ms,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Shadesmith Configuration");
    println!("========================");
    println!();

    match Config::config_file_path() {
        Ok(path) => println!("File: {}", path.display()),
        Err(_) => println!("File: (unavailable)"),
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    println!();

    println!("Palette:");
    println!("  Default Color: {}", config.palette.default_color.to_css_hex());
    println!("  Group Name: {}", config.palette.group_name);
    println!();

    println!("Feedback:");
    println!("  Copied Indicator: {} ms", config.feedback.copied_ms);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name() {
        assert_eq!(theme_name(ThemeMode::Auto), "auto");
        assert_eq!(theme_name(ThemeMode::Light), "light");
        assert_eq!(theme_name(ThemeMode::Dark), "dark");
    }

    #[test]
    fn test_set_args_empty() {
        let args = ConfigSetArgs {
            theme: None,
            default_color: None,
            group: None,
            copied_ms: None,
            show_help_on_startup: None,
        };
        assert!(args.is_empty());
        assert!(args.execute().is_err());
    }
}
