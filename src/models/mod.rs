//! Data models for colors and shade scales.
//!
//! Models are independent of the UI and of clipboard/terminal I/O.

pub mod rgb;
pub mod shade_scale;

// Re-export all model types
pub use rgb::RgbColor;
pub use shade_scale::{Palette, ShadeKey};
