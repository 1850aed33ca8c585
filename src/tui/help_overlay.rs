//! Help overlay listing keyboard shortcuts.
//!
//! Main-view entries come from the [`ShortcutRegistry`] so the overlay never
//! drifts from the real bindings; popup keys are listed alongside.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::shortcuts::{Action, ShortcutRegistry};
use crate::tui::{centered_rect, Component, Theme};

/// Main-view actions in display order, grouped by section.
const SECTIONS: &[(&str, &[Action])] = &[
    (
        "PALETTE",
        &[
            Action::RandomizeColor,
            Action::OpenColorPicker,
            Action::ClearInput,
        ],
    ),
    (
        "SWATCHES",
        &[
            Action::SelectPrevious,
            Action::SelectNext,
            Action::SelectFirst,
            Action::SelectLast,
            Action::CopyShade,
        ],
    ),
    ("EXPORT", &[Action::OpenExport]),
    ("GENERAL", &[Action::ToggleHelp, Action::Quit]),
];

/// Keys handled inside popups.
const POPUP_KEYS: &[(&str, &str)] = &[
    ("Enter/y", "Copy palette code (export)"),
    ("↑↓ / ←→", "Adjust channel by 10 / 1 (picker)"),
    ("Tab", "Next channel (picker)"),
    ("Esc", "Close popup"),
];

/// Events emitted by the help overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// User closed the overlay
    Closed,
}

/// Scrollable shortcut reference.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// (section, entries) where an entry is (keys, description)
    sections: Vec<(&'static str, Vec<(String, &'static str)>)>,
    /// Current scroll offset (line number)
    scroll_offset: usize,
}

impl HelpOverlay {
    /// Builds the overlay from the current bindings.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        let mut sections: Vec<(&'static str, Vec<(String, &'static str)>)> = SECTIONS
            .iter()
            .map(|(title, actions)| {
                let entries = actions
                    .iter()
                    .map(|action| (registry.keys_label(*action), action.description()))
                    .collect();
                (*title, entries)
            })
            .collect();
        sections.push((
            "POPUPS",
            POPUP_KEYS
                .iter()
                .map(|(keys, description)| ((*keys).to_string(), *description))
                .collect(),
        ));
        sections.push((
            "HEX FIELD",
            vec![
                ("0-9 a-f #".to_string(), "Type a base color"),
                ("Backspace".to_string(), "Delete last character"),
            ],
        ));

        Self {
            sections,
            scroll_offset: 0,
        }
    }

    fn total_lines(&self) -> usize {
        self.sections
            .iter()
            .map(|(_, entries)| entries.len() + 2)
            .sum()
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines() {
            self.scroll_offset += 1;
        }
    }

    fn content(&self, theme: &Theme) -> Vec<Line<'_>> {
        let mut lines = Vec::with_capacity(self.total_lines());
        for (title, entries) in &self.sections {
            lines.push(Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in entries {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{keys:<18}"), Style::default().fg(theme.success)),
                    Span::styled(*description, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => return Some(HelpOverlayEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Home => self.scroll_offset = 0,
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let visible_height = usize::from(chunks[0].height.saturating_sub(2));
        let paragraph = Paragraph::new(self.content(theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        frame.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines().saturating_sub(visible_height))
                .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_lists_registry_bindings() {
        let overlay = HelpOverlay::new(&ShortcutRegistry::new());
        let palette = &overlay.sections[0];
        assert_eq!(palette.0, "PALETTE");
        assert_eq!(palette.1[0], ("Space".to_string(), "Generate a random base color"));
    }

    #[test]
    fn test_scroll_bounds() {
        let mut overlay = HelpOverlay::new(&ShortcutRegistry::new());
        overlay.scroll_up();
        assert_eq!(overlay.scroll_offset, 0);
        for _ in 0..500 {
            overlay.scroll_down();
        }
        assert_eq!(overlay.scroll_offset, overlay.total_lines() - 1);
    }

    #[test]
    fn test_close() {
        let mut overlay = HelpOverlay::new(&ShortcutRegistry::new());
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(overlay.handle_input(esc), Some(HelpOverlayEvent::Closed));
    }
}
