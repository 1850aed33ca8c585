//! Hex text field reconciled with the committed base color.
//!
//! The field holds whatever the user is typing; the committed color only moves
//! when the text parses as a color, so half-typed input never disturbs the
//! palette.

use rand::Rng;

use crate::models::RgbColor;

/// Longest text the field accepts, `#` included.
const MAX_INPUT_LEN: usize = 7;

/// Result of applying a text edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChange {
    /// The edit was too long and the field is unchanged
    Rejected,
    /// The field changed but does not hold a valid color yet
    Pending,
    /// The field holds a valid color, now committed
    Committed(RgbColor),
}

/// Free-text hex field plus the last valid color it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexInput {
    raw_text: String,
    committed: RgbColor,
}

impl HexInput {
    /// Creates a field showing `color`.
    #[must_use]
    pub fn new(color: RgbColor) -> Self {
        Self {
            raw_text: color.to_css_hex(),
            committed: color,
        }
    }

    /// Text currently in the field.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Last valid color.
    #[must_use]
    pub const fn committed(&self) -> RgbColor {
        self.committed
    }

    /// Whether the field text currently differs from a valid color.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !RgbColor::is_valid_hex(&self.raw_text)
    }

    /// Normalizes user text: trimmed, lower-cased, `#`-prefixed.
    #[must_use]
    pub fn normalize(text: &str) -> String {
        let text = text.trim().to_lowercase();
        if text.starts_with('#') {
            text
        } else {
            format!("#{text}")
        }
    }

    /// Applies a color coming from the picker. Picker colors are always valid.
    pub fn set_from_picker(&mut self, color: RgbColor) {
        self.raw_text = color.to_css_hex();
        self.committed = color;
    }

    /// Replaces the field text, committing it if it is a valid color.
    pub fn set_text(&mut self, text: &str) -> TextChange {
        let normalized = Self::normalize(text);
        if normalized.len() > MAX_INPUT_LEN {
            return TextChange::Rejected;
        }

        self.raw_text = normalized;
        match RgbColor::from_hex(&self.raw_text) {
            Ok(color) => {
                self.committed = color;
                TextChange::Committed(color)
            }
            Err(_) => TextChange::Pending,
        }
    }

    /// Appends a typed character.
    pub fn push_char(&mut self, c: char) -> TextChange {
        let mut next = self.raw_text.clone();
        next.push(c);
        self.set_text(&next)
    }

    /// Removes the last character. The `#` prefix always stays.
    pub fn backspace(&mut self) -> TextChange {
        let mut next = self.raw_text.clone();
        next.pop();
        self.set_text(&next)
    }

    /// Empties the field down to the `#` prefix.
    pub fn clear(&mut self) -> TextChange {
        self.set_text("")
    }

    /// Commits a uniformly random color to both the field and the committed color.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RgbColor {
        let color = RgbColor::random(rng);
        self.set_from_picker(color);
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blue() -> RgbColor {
        RgbColor::from_hex("#2563eb").unwrap()
    }

    #[test]
    fn test_new_shows_color() {
        let input = HexInput::new(blue());
        assert_eq!(input.raw_text(), "#2563eb");
        assert_eq!(input.committed(), blue());
        assert!(!input.is_pending());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(HexInput::normalize("  E63946 "), "#e63946");
        assert_eq!(HexInput::normalize("#ABC"), "#abc");
        assert_eq!(HexInput::normalize(""), "#");
    }

    #[test]
    fn test_set_text_without_hash_commits() {
        let mut input = HexInput::new(blue());
        let change = input.set_text("e63946");
        let red = RgbColor::new(0xe6, 0x39, 0x46);
        assert_eq!(change, TextChange::Committed(red));
        assert_eq!(input.raw_text(), "#e63946");
        assert_eq!(input.committed(), red);
    }

    #[test]
    fn test_invalid_text_keeps_committed_color() {
        let mut input = HexInput::new(blue());
        for text in ["zz1234", "#1", "#12", "#12345"] {
            assert_eq!(input.set_text(text), TextChange::Pending, "{text}");
            assert_eq!(input.committed(), blue());
        }
        // The last partial input is still shown so typing can continue
        assert_eq!(input.raw_text(), "#12345");
        assert!(input.is_pending());
    }

    #[test]
    fn test_too_long_text_is_rejected() {
        let mut input = HexInput::new(blue());
        assert_eq!(input.set_text("#e639461"), TextChange::Rejected);
        assert_eq!(input.raw_text(), "#2563eb");
        assert_eq!(input.committed(), blue());
    }

    #[test]
    fn test_typing_character_by_character() {
        let mut input = HexInput::new(blue());
        input.clear();
        assert_eq!(input.raw_text(), "#");

        let mut changes = Vec::new();
        for c in "e63946".chars() {
            changes.push(input.push_char(c));
        }

        // "#e63" is already a valid short hex color, so it commits early
        assert_eq!(changes[0], TextChange::Pending);
        assert_eq!(changes[1], TextChange::Pending);
        assert_eq!(
            changes[2],
            TextChange::Committed(RgbColor::new(0xee, 0x66, 0x33))
        );
        assert_eq!(
            changes[5],
            TextChange::Committed(RgbColor::new(0xe6, 0x39, 0x46))
        );
        assert_eq!(input.raw_text(), "#e63946");

        // A seventh digit would exceed the field
        assert_eq!(input.push_char('0'), TextChange::Rejected);
        assert_eq!(input.raw_text(), "#e63946");
    }

    #[test]
    fn test_uppercase_typing_is_lowered() {
        let mut input = HexInput::new(blue());
        input.clear();
        for c in "ABCDEF".chars() {
            input.push_char(c);
        }
        assert_eq!(input.raw_text(), "#abcdef");
    }

    #[test]
    fn test_backspace_keeps_hash() {
        let mut input = HexInput::new(blue());
        for _ in 0..10 {
            input.backspace();
        }
        assert_eq!(input.raw_text(), "#");
        // "#256" was the last prefix that parsed on the way down
        assert_eq!(input.committed(), RgbColor::new(0x22, 0x55, 0x66));
    }

    #[test]
    fn test_picker_overrides_pending_text() {
        let mut input = HexInput::new(blue());
        input.set_text("#12");
        let green = RgbColor::new(0x10, 0xb9, 0x81);
        input.set_from_picker(green);
        assert_eq!(input.raw_text(), "#10b981");
        assert_eq!(input.committed(), green);
    }

    #[test]
    fn test_randomize_commits_both() {
        let mut input = HexInput::new(blue());
        let mut rng = StdRng::seed_from_u64(1);
        let color = input.randomize(&mut rng);
        assert_eq!(input.committed(), color);
        assert_eq!(input.raw_text(), color.to_css_hex());
    }
}
