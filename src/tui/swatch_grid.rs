//! Swatch grid for the generated palette.
//!
//! Shades flow left to right in ascending order, wrapping onto more rows when
//! the terminal is too narrow for a single strip.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use crate::models::{Palette, ShadeKey};
use crate::tui::clipboard::CopyFeedback;
use crate::tui::Theme;

/// Minimum swatch width: border plus `#RRGGBB` plus padding.
const MIN_SWATCH_WIDTH: u16 = 11;

/// Swatch height: border plus label, hex and indicator lines.
pub const SWATCH_HEIGHT: u16 = 5;

/// Number of swatches per row that fit in `width`.
#[must_use]
pub fn columns_for_width(width: u16) -> usize {
    let fit = usize::from(width / MIN_SWATCH_WIDTH);
    fit.clamp(1, ShadeKey::ALL.len())
}

/// Number of rows needed at `width`.
#[must_use]
pub fn rows_for_width(width: u16) -> usize {
    ShadeKey::ALL.len().div_ceil(columns_for_width(width))
}

/// Renders every shade of `palette` into `area`.
pub fn render_swatch_grid(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    selected: ShadeKey,
    feedback: &CopyFeedback<ShadeKey>,
    theme: &Theme,
) {
    let now = Instant::now();
    let columns = columns_for_width(area.width);
    let rows = rows_for_width(area.width);

    let mut row_constraints = vec![Constraint::Length(SWATCH_HEIGHT); rows];
    row_constraints.push(Constraint::Min(0));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);
    let column_ratio = Constraint::Ratio(1, u32::try_from(columns).unwrap_or(1));

    let shades: Vec<_> = palette.iter().collect();
    for (row, chunk) in shades.chunks(columns).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![column_ratio; columns])
            .split(row_areas[row]);

        for (cell, (key, color)) in cells.iter().zip(chunk) {
            let is_selected = *key == selected;
            let text_color = color.contrast_text().to_ratatui_color();
            let swatch_style = Style::default().bg(color.to_ratatui_color()).fg(text_color);

            let block = if is_selected {
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(swatch_style.fg(theme.cursor))
                    .style(swatch_style)
            } else {
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(swatch_style.fg(color.to_ratatui_color()))
                    .style(swatch_style)
            };

            let indicator = if feedback.is_visible(*key, now) {
                "Copied"
            } else {
                ""
            };
            let lines = vec![
                Line::from(key.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
                Line::from(color.to_hex()),
                Line::from(indicator).style(Style::default().add_modifier(Modifier::ITALIC)),
            ];

            let swatch = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(swatch, *cell);
        }
    }
}
