//! CLI command handlers for Shadesmith.
//!
//! This module provides headless, scriptable access to palette generation
//! and configuration for automation and testing.

pub mod common;
pub mod config;
pub mod generate;
pub mod random;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use random::RandomArgs;
