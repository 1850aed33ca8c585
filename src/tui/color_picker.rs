//! RGB slider popup.
//!
//! Every channel move is reported to the parent, which commits it to the hex
//! field at once. There is no cancel: closing keeps the last committed color.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::models::RgbColor;
use crate::tui::{centered_rect, Component, Theme};

const COARSE_STEP: i16 = 10;
const FINE_STEP: i16 = 1;

/// One of the three sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
}

impl RgbChannel {
    /// Slider order, top to bottom.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }

    const fn tint(self) -> Color {
        match self {
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Blue => Color::Blue,
        }
    }

    /// The slider below, wrapping to the top.
    #[must_use]
    pub const fn below(self) -> Self {
        Self::ALL[(self.index() + 1) % 3]
    }

    /// The slider above, wrapping to the bottom.
    #[must_use]
    pub const fn above(self) -> Self {
        Self::ALL[(self.index() + 2) % 3]
    }
}

/// Events emitted by the color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPickerEvent {
    /// A channel moved; the new color should be committed immediately
    Changed(RgbColor),
    /// User closed the picker
    Closed,
}

/// Slider state, seeded from the current base color.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    channels: [u8; 3],
    focused: RgbChannel,
}

impl ColorPicker {
    /// Opens the sliders on `color` with Red focused.
    #[must_use]
    pub const fn with_color(color: RgbColor) -> Self {
        Self {
            channels: [color.r, color.g, color.b],
            focused: RgbChannel::Red,
        }
    }

    /// Color currently shown by the sliders.
    #[must_use]
    pub const fn color(&self) -> RgbColor {
        let [r, g, b] = self.channels;
        RgbColor::new(r, g, b)
    }

    /// Focused slider.
    #[must_use]
    pub const fn active_channel(&self) -> RgbChannel {
        self.focused
    }

    /// Shifts the focused channel by `delta`, clamped to 0..=255.
    ///
    /// Returns `Changed` only when the value actually moved.
    pub fn nudge(&mut self, delta: i16) -> Option<ColorPickerEvent> {
        let slot = &mut self.channels[self.focused.index()];
        let moved = u8::try_from((i16::from(*slot) + delta).clamp(0, 255)).unwrap_or(*slot);
        if moved == *slot {
            return None;
        }
        *slot = moved;
        Some(ColorPickerEvent::Changed(self.color()))
    }

    fn focus(&mut self, channel: RgbChannel) -> Option<ColorPickerEvent> {
        self.focused = channel;
        None
    }
}

impl Component for ColorPicker {
    type Event = ColorPickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'p') => {
                Some(ColorPickerEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => self.nudge(COARSE_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.nudge(-COARSE_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.nudge(FINE_STEP),
            KeyCode::Left | KeyCode::Char('h') => self.nudge(-FINE_STEP),
            KeyCode::BackTab => self.focus(self.focused.above()),
            KeyCode::Tab if shifted => self.focus(self.focused.above()),
            KeyCode::Tab => self.focus(self.focused.below()),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(60, 70, area);
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default()
                .title(" Color Picker ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
            area,
        );

        let [red, green, blue, preview, hex, keys] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area.inner(Margin::new(2, 2)));

        for (slider_area, channel) in [red, green, blue].into_iter().zip(RgbChannel::ALL) {
            self.render_slider(f, slider_area, channel, theme);
        }

        let color = self.color();
        f.render_widget(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .style(Style::default().bg(color.to_ratatui_color())),
            preview,
        );
        f.render_widget(
            Paragraph::new(format!("  {}", color.to_hex()))
                .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL).title(" Hex Code ")),
            hex,
        );

        let key_style = Style::default().fg(theme.accent);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("↑↓", key_style),
                Span::raw(" ±10  "),
                Span::styled("←→", key_style),
                Span::raw(" ±1  "),
                Span::styled("Tab", key_style),
                Span::raw(" Channel  "),
                Span::styled("Enter/Esc", key_style),
                Span::raw(" Close"),
            ])),
            keys,
        );
    }
}

impl ColorPicker {
    fn render_slider(&self, f: &mut Frame, area: Rect, channel: RgbChannel, theme: &Theme) {
        let value = self.channels[channel.index()];
        let focused = channel == self.focused;
        let (marker, style) = if focused {
            ("▶", Style::default().fg(channel.tint()).add_modifier(Modifier::BOLD))
        } else {
            (" ", Style::default().fg(theme.text_muted))
        };

        f.render_widget(
            Gauge::default()
                .gauge_style(style)
                .label(format!("{marker} {}: {value:3}", channel.label()))
                .ratio(f64::from(value) / 255.0),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_adjust_emits_changed() {
        let mut picker = ColorPicker::with_color(RgbColor::new(100, 100, 100));

        assert_eq!(
            picker.handle_input(key(KeyCode::Up)),
            Some(ColorPickerEvent::Changed(RgbColor::new(110, 100, 100)))
        );
        assert_eq!(
            picker.handle_input(key(KeyCode::Left)),
            Some(ColorPickerEvent::Changed(RgbColor::new(109, 100, 100)))
        );
    }

    #[test]
    fn test_tab_cycles_channels() {
        let mut picker = ColorPicker::with_color(RgbColor::BLACK);
        assert_eq!(picker.handle_input(key(KeyCode::Tab)), None);
        assert_eq!(picker.active_channel(), RgbChannel::Green);
        picker.handle_input(key(KeyCode::Tab));
        assert_eq!(picker.active_channel(), RgbChannel::Blue);
        picker.handle_input(key(KeyCode::Tab));
        assert_eq!(picker.active_channel(), RgbChannel::Red);
        picker.handle_input(key(KeyCode::BackTab));
        assert_eq!(picker.active_channel(), RgbChannel::Blue);
        picker.handle_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        assert_eq!(picker.active_channel(), RgbChannel::Green);

        picker.handle_input(key(KeyCode::Char('k')));
        assert_eq!(picker.color(), RgbColor::new(0, 10, 0));
    }

    #[test]
    fn test_nudge_clamps_at_bounds() {
        let mut picker = ColorPicker::with_color(RgbColor::new(250, 5, 0));
        assert_eq!(
            picker.nudge(COARSE_STEP),
            Some(ColorPickerEvent::Changed(RgbColor::new(255, 5, 0)))
        );
        assert_eq!(picker.nudge(COARSE_STEP), None);

        picker.handle_input(key(KeyCode::Tab));
        assert_eq!(
            picker.nudge(-COARSE_STEP),
            Some(ColorPickerEvent::Changed(RgbColor::new(255, 0, 0)))
        );
        assert_eq!(picker.nudge(-FINE_STEP), None);
    }

    #[test]
    fn test_saturated_channel_reports_nothing() {
        let mut picker = ColorPicker::with_color(RgbColor::WHITE);
        assert_eq!(picker.handle_input(key(KeyCode::Up)), None);
        assert_eq!(picker.handle_input(key(KeyCode::Right)), None);
        assert_eq!(picker.color(), RgbColor::WHITE);
    }

    #[test]
    fn test_close_keys() {
        let mut picker = ColorPicker::with_color(RgbColor::BLACK);
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q'), KeyCode::Char('p')] {
            assert_eq!(picker.handle_input(key(code)), Some(ColorPickerEvent::Closed));
        }
    }

    #[test]
    fn test_space_is_ignored() {
        let mut picker = ColorPicker::with_color(RgbColor::new(1, 2, 3));
        assert_eq!(picker.handle_input(key(KeyCode::Char(' '))), None);
        assert_eq!(picker.color(), RgbColor::new(1, 2, 3));
    }
}
