//! Interactive palette editor.
//!
//! A hex field on top, the eleven swatches of the current palette below it,
//! and popups for the RGB picker, export snippet and key reference.

pub mod clipboard;
pub mod color_picker;
pub mod component;
pub mod export_overlay;
pub mod handlers;
pub mod help_overlay;
pub mod hex_input;
pub mod status_bar;
pub mod swatch_grid;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{Palette, RgbColor, ShadeKey};
use crate::shortcuts::{Action, ShortcutRegistry};

pub use clipboard::{ClipboardWriter, CopyFeedback, MemoryClipboard, SystemClipboard};
pub use color_picker::{ColorPicker, ColorPickerEvent};
pub use component::Component;
pub use export_overlay::{ExportOverlay, ExportOverlayEvent};
pub use help_overlay::{HelpOverlay, HelpOverlayEvent};
pub use hex_input::{HexInput, TextChange};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// The popup that currently owns the keyboard.
///
/// At most one is open. The main view's shortcuts stay inactive until it closes.
#[derive(Debug)]
pub enum ActiveComponent {
    /// RGB color picker
    ColorPicker(ColorPicker),
    /// Export overlay with the config snippet
    ExportOverlay(ExportOverlay),
    /// Key reference
    HelpOverlay(HelpOverlay),
}

/// Everything the editor renders from.
///
/// Rendering borrows it read-only; key handlers are the only writers.
pub struct AppState {
    // Core data
    /// Hex field and committed base color
    pub hex_input: HexInput,
    /// Shades derived from the committed base color
    pub palette: Palette,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Swatch under the cursor
    pub selected: ShadeKey,
    /// Per-swatch "Copied" indicators
    pub swatch_feedback: CopyFeedback<ShadeKey>,
    /// Status bar message
    pub status_message: String,
    /// Shown in the error overlay until dismissed
    pub error_message: Option<String>,
    /// Open popup, if any
    pub active_component: Option<ActiveComponent>,

    // System resources
    /// Settings loaded at startup
    pub config: Config,
    /// Main-view key bindings
    pub shortcuts: ShortcutRegistry,
    /// Clipboard used for every copy
    pub clipboard: Box<dyn ClipboardWriter>,
    /// Source of random base colors
    pub rng: StdRng,

    // Control flags
    /// Set by the quit shortcut
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for `config`, starting from `initial_color` when given
    /// and the configured default color otherwise.
    #[must_use]
    pub fn new(
        config: Config,
        initial_color: Option<RgbColor>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let base = initial_color.unwrap_or(config.palette.default_color);
        let theme = Theme::from_mode(config.ui.theme_mode);
        let shortcuts = ShortcutRegistry::new();

        let active_component = config
            .ui
            .show_help_on_startup
            .then(|| ActiveComponent::HelpOverlay(HelpOverlay::new(&shortcuts)));

        Self {
            hex_input: HexInput::new(base),
            palette: Palette::generate(base),
            theme,
            selected: ShadeKey::S500,
            swatch_feedback: CopyFeedback::new(config.feedback.window()),
            status_message: format!("Press {} for help", shortcuts.keys_label(Action::ToggleHelp)),
            error_message: None,
            active_component,
            config,
            shortcuts,
            clipboard,
            rng: StdRng::from_entropy(),
            should_quit: false,
        }
    }

    /// Committed base color.
    #[must_use]
    pub const fn base_color(&self) -> RgbColor {
        self.hex_input.committed()
    }

    /// Applies the outcome of a hex field edit, regenerating the palette on commit.
    pub fn apply_text_change(&mut self, change: TextChange) {
        if let TextChange::Committed(color) = change {
            self.regenerate(color);
        }
    }

    /// Rebuilds the palette from `base`.
    fn regenerate(&mut self, base: RgbColor) {
        if self.palette.base() == base {
            return;
        }
        self.palette = Palette::generate(base);
        tracing::debug!(base = %base, "palette regenerated");
    }

    /// Commits a random base color.
    pub fn randomize(&mut self) {
        let color = self.hex_input.randomize(&mut self.rng);
        self.regenerate(color);
        self.set_status(format!("Random base color {color}"));
    }

    /// Commits a color coming from the picker.
    pub fn set_color_from_picker(&mut self, color: RgbColor) {
        self.hex_input.set_from_picker(color);
        self.regenerate(color);
    }

    /// Moves the swatch cursor by `delta`, clamped to the scale.
    pub fn move_selection(&mut self, delta: isize) {
        let last = ShadeKey::ALL.len() - 1;
        let index = self.selected.index().saturating_add_signed(delta).min(last);
        if let Some(key) = ShadeKey::from_index(index) {
            self.selected = key;
        }
    }

    /// Copies the selected shade as uppercase hex.
    pub fn copy_selected_shade(&mut self, now: Instant) {
        let key = self.selected;
        let hex = self.palette.get(key).to_hex();
        match self
            .swatch_feedback
            .copy(self.clipboard.as_mut(), key, &hex, now)
        {
            Ok(()) => {
                tracing::info!(shade = %key, hex = %hex, "shade copied");
                self.set_status(format!("Copied {key}: {hex}"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "shade copy failed");
                self.set_error(format!("Failed to copy to clipboard: {e:#}"));
            }
        }
    }

    /// Copies the export snippet, when the overlay is open.
    pub fn copy_snippet(&mut self, now: Instant) {
        let Some(ActiveComponent::ExportOverlay(overlay)) = &mut self.active_component else {
            return;
        };
        match overlay.copy(self.clipboard.as_mut(), now) {
            Ok(()) => {
                tracing::info!("palette snippet copied");
                self.set_status("Palette code copied to clipboard");
            }
            Err(e) => {
                tracing::warn!(error = %e, "snippet copy failed");
                self.set_error(format!("Failed to copy to clipboard: {e:#}"));
            }
        }
    }

    /// Hides elapsed "Copied" indicators. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.swatch_feedback.expire(now);
        if let Some(ActiveComponent::ExportOverlay(overlay)) = &mut self.active_component {
            changed |= overlay.expire(now);
        }
        changed
    }

    /// Replaces the status line and drops any pending error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Opens the error overlay.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Dismisses the error overlay.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Open the export overlay for the current palette
    pub fn open_export(&mut self) {
        let overlay = ExportOverlay::new(
            &self.palette,
            &self.config.palette.group_name,
            self.config.feedback.window(),
        );
        self.active_component = Some(ActiveComponent::ExportOverlay(overlay));
        tracing::debug!("export overlay opened");
    }

    /// Open the color picker at the committed color
    pub fn open_color_picker(&mut self) {
        let picker = ColorPicker::with_color(self.base_color());
        self.active_component = Some(ActiveComponent::ColorPicker(picker));
    }

    /// Open the help overlay
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new(
            &self.shortcuts,
        )));
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
    }
}

/// Switches to raw mode on the alternate screen.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Undoes [`setup_terminal`].
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    tracing::info!(base = %state.base_color(), "TUI started");

    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        // Expire "Copied" indicators; redrawn on the next pass
        state.tick(Instant::now());

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    tracing::info!("TUI stopped");
    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Hex field
            Constraint::Min(5),    // Swatches
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_hex_input(f, chunks[1], state);
    swatch_grid::render_swatch_grid(
        f,
        chunks[2],
        &state.palette,
        state.selected,
        &state.swatch_feedback,
        &state.theme,
    );
    StatusBar::render(f, chunks[3], state, &state.theme);

    // Render popup if active
    if let Some(component) = &state.active_component {
        render_popup(f, component, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the app name and base color
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let base = state.base_color();
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("- base ", Style::default().fg(state.theme.text_muted)),
        Span::styled(
            format!(" {} ", base.to_hex()),
            Style::default()
                .bg(base.to_ratatui_color())
                .fg(base.contrast_text().to_ratatui_color()),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render the hex text field
fn render_hex_input(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut spans = vec![Span::styled(
        format!("{}█", state.hex_input.raw_text()),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )];
    if state.hex_input.is_pending() {
        spans.push(Span::styled(
            "  incomplete, palette unchanged",
            Style::default().fg(theme.warning),
        ));
    }

    let border_color = if state.active_component.is_none() {
        theme.field_active
    } else {
        theme.field_inactive
    };
    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Base Color ")
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(field, area);
}

/// Render active popup
fn render_popup(f: &mut Frame, component: &ActiveComponent, state: &AppState) {
    match component {
        ActiveComponent::ColorPicker(picker) => picker.render(f, f.area(), &state.theme),
        ActiveComponent::ExportOverlay(overlay) => {
            // Dim everything behind the modal
            let dim = Block::default().style(Style::default().add_modifier(Modifier::DIM));
            f.render_widget(dim, f.area());
            overlay.render(f, f.area(), &state.theme);
        }
        ActiveComponent::HelpOverlay(help) => help.render(f, f.area(), &state.theme),
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background with error color
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Error message
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ERROR ")
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            " Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background));
    f.render_widget(help, chunks[1]);
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::{KeyCode, KeyEventKind};

    // Windows reports key releases too
    if key.kind == KeyEventKind::Release {
        return Ok(false);
    }

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_component.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}
