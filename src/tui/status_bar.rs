//! Status bar widget for displaying status messages and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{ActiveComponent, AppState, Theme};
use crate::shortcuts::Action;

/// Main-view actions surfaced as hints, most useful first.
const MAIN_HINTS: &[(Action, &str)] = &[
    (Action::RandomizeColor, "Random"),
    (Action::CopyShade, "Copy shade"),
    (Action::OpenExport, "Export"),
    (Action::OpenColorPicker, "Picker"),
    (Action::ToggleHelp, "Help"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        // First line: error, status message, or nothing
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.as_str())
        } else {
            Line::from("")
        };

        let status = Paragraph::new(vec![message_line, Self::hints_line(state, theme)])
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Hints for whatever currently owns input.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: Vec<(String, &str)> = match &state.active_component {
            Some(ActiveComponent::ExportOverlay(_)) => {
                vec![("Enter".into(), "Copy code"), ("Esc".into(), "Close")]
            }
            Some(ActiveComponent::ColorPicker(_)) => vec![
                ("↑↓←→".into(), "Adjust"),
                ("Tab".into(), "Channel"),
                ("Esc".into(), "Close"),
            ],
            Some(ActiveComponent::HelpOverlay(_)) => {
                vec![("↑↓".into(), "Scroll"), ("Esc".into(), "Close")]
            }
            None => MAIN_HINTS
                .iter()
                .map(|(action, label)| (state.shortcuts.keys_label(*action), *label))
                .collect(),
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(
                action.to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}
