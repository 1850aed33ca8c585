//! Export overlay showing the palette as a config snippet.
//!
//! The overlay owns its own "Copied" indicator, so closing and reopening it
//! always starts from the plain "Copy Code" label.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::models::Palette;
use crate::tui::clipboard::{ClipboardWriter, CopyFeedback};
use crate::tui::{centered_rect, Component, Theme};

/// Events emitted by the export overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOverlayEvent {
    /// User asked to copy the snippet
    CopyRequested,
    /// User closed the overlay
    Closed,
}

/// Modal snippet view with a copy button.
#[derive(Debug, Clone)]
pub struct ExportOverlay {
    snippet: String,
    feedback: CopyFeedback<()>,
}

impl ExportOverlay {
    /// Creates the overlay for `palette`, exported under `group`.
    #[must_use]
    pub fn new(palette: &Palette, group: &str, window: Duration) -> Self {
        Self {
            snippet: palette.to_config_snippet(group),
            feedback: CopyFeedback::new(window),
        }
    }

    /// Snippet text as shown and copied.
    #[must_use]
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    /// Copies the snippet and shows "Copied" on success.
    ///
    /// # Errors
    ///
    /// Propagates the clipboard error; the label stays "Copy Code".
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardWriter, now: Instant) -> Result<()> {
        self.feedback.copy(clipboard, (), &self.snippet, now)
    }

    /// Whether the "Copied" label is showing at `now`.
    #[must_use]
    pub fn is_copied(&self, now: Instant) -> bool {
        self.feedback.is_visible((), now)
    }

    /// Drops an elapsed indicator. Returns true if the label changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        self.feedback.expire(now)
    }

    fn button_label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "Copied"
        } else {
            "Copy Code"
        }
    }
}

impl Component for ExportOverlay {
    type Event = ExportOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'c') => Some(ExportOverlayEvent::CopyRequested),
            KeyCode::Esc | KeyCode::Char('q' | 'x') => Some(ExportOverlayEvent::Closed),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(60, 80, area);

        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Export Palette ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(3),    // Snippet
                Constraint::Length(3), // Copy button
                Constraint::Length(1), // Instructions
            ])
            .split(inner);

        let code: Vec<Line> = self
            .snippet
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.text))))
            .collect();
        let code_widget = Paragraph::new(code).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.surface)),
        );
        f.render_widget(code_widget, chunks[0]);

        let now = Instant::now();
        let button_style = if self.is_copied(now) {
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(self.button_label(now))
            .style(button_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(button_style));
        f.render_widget(button, chunks[1]);

        let instructions = Line::from(vec![
            Span::styled("Enter/y", Style::default().fg(theme.accent)),
            Span::raw(" Copy  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" Close"),
        ]);
        f.render_widget(
            Paragraph::new(instructions).alignment(Alignment::Center),
            chunks[2],
        );
    }
}
