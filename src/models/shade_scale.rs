//! Shade-scale generation.
//!
//! A [`Palette`] maps the eleven fixed shade keys (50 … 950) to colors derived
//! from one base color by interpolating in CIE LAB between a darker anchor, the
//! base itself and a lighter anchor.

use ::palette::Mix;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use super::RgbColor;

/// Number of `darken`/`brighten` steps between the base and each anchor.
const ANCHOR_STEPS: f32 = 2.0;

/// One of the fixed lightness steps of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    /// 50, the lightest shade
    S50,
    /// 100
    S100,
    /// 200
    S200,
    /// 300
    S300,
    /// 400
    S400,
    /// 500, always the base color
    S500,
    /// 600
    S600,
    /// 700
    S700,
    /// 800
    S800,
    /// 900
    S900,
    /// 950, the darkest shade
    S950,
}

impl ShadeKey {
    /// All shade keys, lightest first.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// Numeric label of the shade (50, 100, …, 950).
    #[must_use]
    pub const fn value(&self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Position of the shade in [`ShadeKey::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Shade key at `index`, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An 11-step shade scale derived from a base color.
///
/// Invariant: exactly one color per [`ShadeKey`], stored lightest first, and
/// the 500 entry is the base color verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    shades: [RgbColor; 11],
}

impl Palette {
    /// Generates the shade scale for `base`.
    ///
    /// The scale runs through `base.darken(2)`, `base` and `base.brighten(2)`
    /// in LAB and is sampled at eleven evenly spaced points. Colors near the
    /// gamut edge clip to black or white, giving a flatter scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use shadesmith::models::{Palette, RgbColor, ShadeKey};
    ///
    /// let base = RgbColor::from_hex("#2563eb").unwrap();
    /// let palette = Palette::generate(base);
    /// assert_eq!(palette.get(ShadeKey::S500), base);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn generate(base: RgbColor) -> Self {
        let darker = base.darken(ANCHOR_STEPS).to_lab();
        let middle = base.to_lab();
        let lighter = base.brighten(ANCHOR_STEPS).to_lab();

        let last = ShadeKey::ALL.len() - 1;
        let mut shades = [base; 11];
        for (i, slot) in shades.iter_mut().enumerate() {
            // Sample position on the dark → light scale; index 0 is lightest.
            let t = (last - i) as f32 / last as f32;
            let lab = if t <= 0.5 {
                darker.mix(middle, t * 2.0)
            } else {
                middle.mix(lighter, (t - 0.5) * 2.0)
            };
            *slot = RgbColor::from_lab(lab);
        }
        shades[ShadeKey::S500.index()] = base;

        Self { shades }
    }

    /// The base color (shade 500).
    #[must_use]
    pub const fn base(&self) -> RgbColor {
        self.shades[ShadeKey::S500.index()]
    }

    /// Color for `key`.
    #[must_use]
    pub const fn get(&self, key: ShadeKey) -> RgbColor {
        self.shades[key.index()]
    }

    /// Iterates `(key, color)` pairs lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, RgbColor)> + '_ {
        ShadeKey::ALL.into_iter().zip(self.shades.iter().copied())
    }

    /// Renders the style-configuration snippet for this palette.
    ///
    /// ```text
    /// 'primary': {
    ///     '50': '#EFF5FF',
    ///     ...
    /// },
    /// ```
    #[must_use]
    pub fn to_config_snippet(&self, group: &str) -> String {
        let body = self
            .iter()
            .map(|(key, color)| format!("    '{key}': '{}',", color.to_hex()))
            .collect::<Vec<_>>()
            .join("\n");
        format!("'{group}': {{\n{body}\n}},")
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShadeKey::ALL.len()))?;
        for (key, color) in self.iter() {
            map.serialize_entry(&key.to_string(), &color.to_hex())?;
        }
        map.end()
    }
}
