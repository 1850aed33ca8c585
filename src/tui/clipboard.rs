//! Clipboard writes with transient "copied" feedback.
//!
//! [`ClipboardWriter`] is the seam to the system clipboard; [`CopyFeedback`]
//! tracks, per item, until when a "Copied" indicator stays visible.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Something that can receive clipboard text.
pub trait ClipboardWriter {
    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or refuses the write.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, opened lazily on first write.
///
/// The handle is kept for the lifetime of the app; on X11 the copied content
/// is only served while a handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a clipboard that connects on first use.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => arboard::Clipboard::new().context("Failed to open system clipboard")?,
        };
        self.handle
            .insert(handle)
            .set_text(text.to_owned())
            .context("Failed to copy to clipboard")
    }
}

/// In-memory clipboard, used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    /// Last text written
    pub contents: Option<String>,
    /// Number of successful writes
    pub writes: usize,
    /// When set, every write fails
    pub fail: bool,
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("Clipboard access denied");
        }
        self.contents = Some(text.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Per-item "copied" indicators with a fixed visibility window.
#[derive(Debug, Clone)]
pub struct CopyFeedback<K> {
    window: Duration,
    visible_until: HashMap<K, Instant>,
}

impl<K: Copy + Eq + Hash> CopyFeedback<K> {
    /// Creates feedback whose indicators stay up for `window`.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            visible_until: HashMap::new(),
        }
    }

    /// Writes `text` and, on success, shows the indicator for `key`.
    ///
    /// Copying the same key again restarts its window. A failed write leaves
    /// every indicator untouched.
    ///
    /// # Errors
    ///
    /// Propagates the clipboard error.
    pub fn copy(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
        key: K,
        text: &str,
        now: Instant,
    ) -> Result<()> {
        clipboard.write_text(text)?;
        self.visible_until.insert(key, now + self.window);
        Ok(())
    }

    /// Whether the indicator for `key` is showing at `now`.
    #[must_use]
    pub fn is_visible(&self, key: K, now: Instant) -> bool {
        self.visible_until
            .get(&key)
            .is_some_and(|until| now < *until)
    }

    /// Drops indicators whose window has elapsed. Returns true if any did.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.visible_until.len();
        self.visible_until.retain(|_, until| now < *until);
        before != self.visible_until.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShadeKey;

    const WINDOW: Duration = Duration::from_millis(2000);

    #[test]
    fn test_copy_shows_only_that_key() {
        let mut clipboard = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new(WINDOW);
        let now = Instant::now();

        feedback
            .copy(&mut clipboard, ShadeKey::S700, "#1E40AF", now)
            .unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some("#1E40AF"));
        assert!(feedback.is_visible(ShadeKey::S700, now));
        for key in ShadeKey::ALL.into_iter().filter(|k| *k != ShadeKey::S700) {
            assert!(!feedback.is_visible(key, now), "{key} should be hidden");
        }
    }

    #[test]
    fn test_indicator_hides_after_window() {
        let mut clipboard = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new(WINDOW);
        let now = Instant::now();

        feedback.copy(&mut clipboard, ShadeKey::S700, "x", now).unwrap();

        assert!(feedback.is_visible(ShadeKey::S700, now + Duration::from_millis(1999)));
        assert!(!feedback.is_visible(ShadeKey::S700, now + WINDOW));

        assert!(!feedback.expire(now + Duration::from_millis(1000)));
        assert!(feedback.expire(now + WINDOW));
        assert!(!feedback.is_visible(ShadeKey::S700, now));
    }

    #[test]
    fn test_keys_expire_independently() {
        let mut clipboard = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new(WINDOW);
        let start = Instant::now();
        let later = start + Duration::from_millis(1500);

        feedback.copy(&mut clipboard, ShadeKey::S100, "a", start).unwrap();
        feedback.copy(&mut clipboard, ShadeKey::S900, "b", later).unwrap();

        let check = start + Duration::from_millis(2500);
        feedback.expire(check);
        assert!(!feedback.is_visible(ShadeKey::S100, check));
        assert!(feedback.is_visible(ShadeKey::S900, check));
    }

    #[test]
    fn test_repeat_copy_restarts_window() {
        let mut clipboard = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new(WINDOW);
        let start = Instant::now();

        feedback.copy(&mut clipboard, ShadeKey::S500, "a", start).unwrap();
        let again = start + Duration::from_millis(1500);
        feedback.copy(&mut clipboard, ShadeKey::S500, "a", again).unwrap();

        assert!(feedback.is_visible(ShadeKey::S500, start + Duration::from_millis(3000)));
        assert_eq!(clipboard.writes, 2);
    }

    #[test]
    fn test_failed_copy_shows_nothing() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        let mut feedback = CopyFeedback::new(WINDOW);
        let now = Instant::now();

        let result = feedback.copy(&mut clipboard, ShadeKey::S300, "x", now);

        assert!(result.is_err());
        assert!(!feedback.is_visible(ShadeKey::S300, now));
        assert!(clipboard.contents.is_none());
    }
}
