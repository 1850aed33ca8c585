//! Action dispatch for the main view.

use anyhow::Result;
use std::time::Instant;

use crate::shortcuts::Action;
use crate::tui::AppState;

/// Runs `action` against the state. Returns true when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::RandomizeColor => state.randomize(),
        Action::OpenColorPicker => state.open_color_picker(),
        Action::ClearInput => {
            let change = state.hex_input.clear();
            state.apply_text_change(change);
        }
        Action::SelectPrevious => state.move_selection(-1),
        Action::SelectNext => state.move_selection(1),
        Action::SelectFirst => state.move_selection(isize::MIN),
        Action::SelectLast => state.move_selection(isize::MAX),
        Action::CopyShade => state.copy_selected_shade(Instant::now()),
        Action::OpenExport => state.open_export(),
        Action::ToggleHelp => state.open_help_overlay(),
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}
