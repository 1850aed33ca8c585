//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a file in the config directory.
//! Headless commands log to stderr. `RUST_LOG` overrides the default level.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Logs to stderr; `warn` by default, `debug` when verbose.
pub fn init_stderr(verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialize logging")
}

/// Opens `dir/shadesmith.log` for appending, creating `dir` if needed.
fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    Ok((path, file))
}

/// Appends to `<config_dir>/shadesmith.log`; `info` by default, `debug` when verbose.
///
/// Returns the log file path. Callers may run without logging when this fails.
pub fn init_file(verbose: bool) -> Result<PathBuf> {
    let (path, file) = open_log_file(&Config::config_dir()?)?;

    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(path)
}
