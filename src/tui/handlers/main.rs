//! Main UI input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::tui::AppState;

/// Handle input for main UI
///
/// Bound keys dispatch their action; everything else edits the hex field.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(key) {
        return super::dispatch_action(state, action);
    }

    let change = match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.hex_input.push_char(c)
        }
        KeyCode::Backspace => state.hex_input.backspace(),
        // No action mapped - ignore key
        _ => return Ok(false),
    };
    state.apply_text_change(change);
    Ok(false)
}
