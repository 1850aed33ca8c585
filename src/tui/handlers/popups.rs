//! Popup input handlers.
//!
//! The active component sees every key; its events are applied to the state here.

use anyhow::Result;
use crossterm::event;
use std::time::Instant;

use crate::tui::{
    ActiveComponent, AppState, ColorPickerEvent, Component, ExportOverlayEvent, HelpOverlayEvent,
};

/// Handle input for whichever popup is active
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match &mut state.active_component {
        Some(ActiveComponent::ColorPicker(picker)) => match picker.handle_input(key) {
            Some(ColorPickerEvent::Changed(color)) => state.set_color_from_picker(color),
            Some(ColorPickerEvent::Closed) => {
                state.close_component();
                state.set_status(format!("Base color {}", state.base_color()));
            }
            None => {}
        },
        Some(ActiveComponent::ExportOverlay(overlay)) => match overlay.handle_input(key) {
            Some(ExportOverlayEvent::CopyRequested) => state.copy_snippet(Instant::now()),
            Some(ExportOverlayEvent::Closed) => state.close_component(),
            None => {}
        },
        Some(ActiveComponent::HelpOverlay(help)) => {
            if let Some(HelpOverlayEvent::Closed) = help.handle_input(key) {
                state.close_component();
            }
        }
        None => {}
    }
    Ok(false)
}
