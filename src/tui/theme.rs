//! Chrome colors for dark and light terminals.
//!
//! Swatches always paint their own RGB values; the theme only covers borders,
//! labels, the hex field and popups around them.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Whether this is the light variant
    pub is_light: bool,

    // Chrome
    /// Borders and titles
    pub primary: Color,
    /// Key hints and buttons
    pub accent: Color,
    /// Border of the selected swatch
    pub cursor: Color,

    // Feedback
    /// "Copied" confirmations
    pub success: Color,
    /// Error overlay and failed copies
    pub error: Color,
    /// Incomplete hex input
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Hints, secondary labels and inactive sliders
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Code block of the export overlay
    pub surface: Color,

    // Hex field border
    /// Border while the main view owns input
    pub field_active: Color,
    /// Border while a popup owns input
    pub field_inactive: Color,
}

impl Theme {
    /// Resolves the configured mode. `Auto` asks the OS via `dark-light`.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Detects the OS theme, falling back to dark when detection fails.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            is_light: false,
            primary: Color::Cyan,
            accent: Color::Yellow,
            cursor: Color::White,
            success: Color::Green,
            error: Color::Red,
            warning: Color::LightYellow,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            surface: Color::Rgb(28, 28, 32),
            field_active: Color::Yellow,
            field_inactive: Color::DarkGray,
        }
    }

    /// Theme for light terminal backgrounds.
    ///
    /// Accents are darkened so they stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            is_light: true,
            primary: Color::Blue,
            accent: Color::Rgb(176, 96, 0),
            cursor: Color::Black,
            success: Color::Rgb(0, 120, 0),
            error: Color::Rgb(190, 0, 0),
            warning: Color::Rgb(160, 90, 0),
            text: Color::Black,
            text_muted: Color::Rgb(110, 110, 110),
            background: Color::White,
            surface: Color::Rgb(244, 244, 246),
            field_active: Color::Rgb(176, 96, 0),
            field_inactive: Color::Rgb(190, 190, 190),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
