//! Shadesmith - terminal color palette generator
//!
//! Pick or randomize a base color, browse its 11-step shade scale, copy shades
//! and export the palette as a config snippet.

use anyhow::Result;
use clap::{Parser, Subcommand};

use shadesmith::cli::common::parse_color;
use shadesmith::cli::{CliError, ConfigArgs, ExitCode, GenerateArgs, RandomArgs};
use shadesmith::config::Config;
use shadesmith::constants::{APP_BINARY_NAME, APP_NAME};
use shadesmith::models::RgbColor;
use shadesmith::{logging, tui};

/// Shadesmith - terminal color palette generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial base color for the interactive view
    #[arg(long, value_name = "HEX")]
    color: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the palette of a base color
    Generate(GenerateArgs),
    /// Print the palette of a random base color
    Random(RandomArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Random(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match &cli.command {
        Some(command) => {
            if let Err(e) = logging::init_stderr(cli.verbose) {
                eprintln!("Warning: {e:#}");
            }
            match command.execute() {
                Ok(()) => ExitCode::Success.into(),
                Err(e) => {
                    eprintln!("Error: {e}");
                    e.exit_code().into()
                }
            }
        }
        None => {
            let initial_color = match cli.color.as_deref().map(parse_color).transpose() {
                Ok(color) => color,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return e.exit_code().into();
                }
            };
            match run_interactive(initial_color, cli.verbose) {
                Ok(()) => ExitCode::Success.into(),
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    eprintln!();
                    eprintln!("For more options, run:");
                    eprintln!("  {APP_BINARY_NAME} --help");
                    ExitCode::Io.into()
                }
            }
        }
    }
}

/// Launches the TUI.
fn run_interactive(initial_color: Option<RgbColor>, verbose: bool) -> Result<()> {
    let log_path = match logging::init_file(verbose) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {e:#}");
            None
        }
    };

    // Load or create default config
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e:#}");
            tracing::warn!(error = %e, "config load failed");
            Config::default()
        }
    };
    tracing::info!(
        log = ?log_path,
        "{} v{} starting",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let clipboard = Box::new(tui::SystemClipboard::new());
    let mut app_state = tui::AppState::new(config, initial_color, clipboard);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result
}
