//! Shared CLI types: errors, exit codes and palette output.

use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::models::{Palette, RgbColor};

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unparsable color, unknown format, invalid option value
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Error category of a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// User-supplied input was rejected
    Validation,
    /// Reading or writing failed
    Io,
}

/// A failed CLI command with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Reading or writing failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    /// Error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            ErrorKind::Validation => ExitCode::Validation,
            ErrorKind::Io => ExitCode::Io,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of every CLI command.
pub type CliResult<T> = Result<T, CliError>;

/// How a palette is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    /// One `<shade>  <HEX>` line per shade
    Text,
    /// `{ "base": ..., "group": ..., "shades": { ... } }`
    Json,
    /// The config snippet shown in the export overlay
    Config,
}

impl PaletteFormat {
    /// Parses `text`, `json` or `config`.
    pub fn parse(name: &str) -> CliResult<Self> {
        match name.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "config" => Ok(Self::Config),
            _ => Err(CliError::validation(format!(
                "Invalid format '{name}'. Must be 'text', 'json', or 'config'"
            ))),
        }
    }
}

#[derive(Serialize)]
struct PaletteOutput<'a> {
    base: String,
    group: &'a str,
    shades: &'a Palette,
}

/// Loads the settings file; a corrupt file is a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Resolves the snippet group: the flag when given, the configured one otherwise.
///
/// A settings file that cannot be loaded is reported, never replaced by defaults.
pub fn resolve_group(flag: Option<&str>) -> CliResult<String> {
    let group = match flag {
        Some(group) => group.trim().to_string(),
        None => load_config()?.palette.group_name,
    };
    if group.is_empty() {
        return Err(CliError::validation("Group name must not be empty"));
    }
    if group.contains('\'') {
        return Err(CliError::validation(format!(
            "Group name must not contain quotes: {group}"
        )));
    }
    Ok(group)
}

/// Renders `palette` in `format`.
pub fn render_palette(palette: &Palette, format: PaletteFormat, group: &str) -> CliResult<String> {
    match format {
        PaletteFormat::Text => Ok(palette
            .iter()
            .map(|(key, color)| format!("{:>3}  {}", key.value(), color.to_hex()))
            .collect::<Vec<_>>()
            .join("\n")),
        PaletteFormat::Json => {
            let output = PaletteOutput {
                base: palette.base().to_hex(),
                group,
                shades: palette,
            };
            serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize palette to JSON: {e}")))
        }
        PaletteFormat::Config => Ok(palette.to_config_snippet(group)),
    }
}

/// Parses a user-supplied base color.
pub fn parse_color(text: &str) -> CliResult<RgbColor> {
    RgbColor::from_hex(text).map_err(|e| CliError::validation(format!("Invalid color: {e}")))
}
