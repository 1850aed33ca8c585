//! 8-bit sRGB colors, CSS hex notation and LAB lightness arithmetic.

use anyhow::{bail, Result};
use palette::{FromColor, Lab, Srgb};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// LAB lightness shift applied by a single `darken`/`brighten` step.
pub const LAB_STEP: f32 = 18.0;

/// Lightness above which black text reads better than white.
const CONTRAST_THRESHOLD: f32 = 60.0;

/// An opaque sRGB color.
///
/// Serializes as a lowercase `#rrggbb` string so it can live directly in
/// TOML and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl RgbColor {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Builds a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses CSS hex notation.
    ///
    /// Accepts 3, 4, 6 or 8 hex digits with an optional leading `#`, in any
    /// case. Short forms double each digit. Alpha is read and discarded.
    ///
    /// ```
    /// use shadesmith::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#2563EB").unwrap(), RgbColor::new(0x25, 0x63, 0xeb));
    /// assert_eq!(RgbColor::from_hex("f0a").unwrap(), RgbColor::new(0xff, 0x00, 0xaa));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let mut nibbles = Vec::with_capacity(8);
        for c in digits.chars() {
            let Some(n) = c.to_digit(16).and_then(|n| u8::try_from(n).ok()) else {
                bail!("Invalid hex color '{hex}'. Only 0-9 and a-f are allowed");
            };
            nibbles.push(n);
        }

        let [r, g, b] = match *nibbles.as_slice() {
            [r, g, b] | [r, g, b, _] => [r * 17, g * 17, b * 17],
            [r1, r0, g1, g0, b1, b0] | [r1, r0, g1, g0, b1, b0, _, _] => {
                [(r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0]
            }
            _ => bail!("Invalid hex color format '{hex}'. Expected 3, 4, 6 or 8 hex digits"),
        };
        Ok(Self::new(r, g, b))
    }

    /// Returns true if `text` parses as a CSS hex color.
    #[must_use]
    pub fn is_valid_hex(text: &str) -> bool {
        Self::from_hex(text).is_ok()
    }

    /// Uppercase `#RRGGBB`, as shown on swatches and in exports.
    ///
    /// ```
    /// use shadesmith::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb`, the form the hex field and config file use.
    #[must_use]
    pub fn to_css_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Truecolor value for ratatui styles.
    #[must_use]
    pub const fn to_ratatui_color(self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Converts the color to CIE LAB (D65).
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let srgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        Lab::from_color(srgb)
    }

    /// Creates an `RgbColor` from CIE LAB, clipping out-of-gamut values into sRGB.
    #[must_use]
    pub fn from_lab(lab: Lab) -> Self {
        let srgb: Srgb<f32> = Srgb::from_color(lab);
        let srgb: Srgb<u8> = srgb.into_format();
        Self::new(srgb.red, srgb.green, srgb.blue)
    }

    /// Perceptual lightness (LAB `L`, 0-100).
    #[must_use]
    pub fn lightness(self) -> f32 {
        self.to_lab().l
    }

    /// Returns a color whose LAB lightness is lowered by `amount` steps.
    ///
    /// Negative amounts brighten. The result is clipped into sRGB, so colors
    /// near black or white saturate at the gamut edge.
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        let mut lab = self.to_lab();
        lab.l -= LAB_STEP * amount;
        Self::from_lab(lab)
    }

    /// Returns a color whose LAB lightness is raised by `amount` steps.
    #[must_use]
    pub fn brighten(self, amount: f32) -> Self {
        self.darken(-amount)
    }

    /// Draws a uniformly random color (each channel uniform over 0-255).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Black or white, whichever stays readable on top of this color.
    #[must_use]
    pub fn contrast_text(self) -> Self {
        if self.lightness() > CONTRAST_THRESHOLD {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_css_hex()
    }
}

impl Default for RgbColor {
    /// `#2563eb`, the blue the generator starts with.
    fn default() -> Self {
        Self::new(0x25, 0x63, 0xeb)
    }
}
