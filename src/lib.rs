//! Shadesmith library
//!
//! Perceptual shade-scale generation from a single base color, plus the
//! terminal UI and headless commands built on top of it.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;
