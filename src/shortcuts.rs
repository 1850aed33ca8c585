//! Centralized shortcut and action system for the main view.
//!
//! Only the main view consults the registry. While a popup is open it owns
//! every key, so bindings here (space to randomize among them) are inert.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === PALETTE ===
    RandomizeColor,
    OpenColorPicker,
    ClearInput,

    // === SWATCHES ===
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    CopyShade,

    // === EXPORT ===
    OpenExport,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
}

impl Action {
    /// Short description used in the help overlay and hints.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::RandomizeColor => "Generate a random base color",
            Self::OpenColorPicker => "Open the color picker",
            Self::ClearInput => "Clear the hex field",
            Self::SelectPrevious => "Select previous shade",
            Self::SelectNext => "Select next shade",
            Self::SelectFirst => "Select shade 50",
            Self::SelectLast => "Select shade 950",
            Self::CopyShade => "Copy selected shade",
            Self::OpenExport => "Export palette code",
            Self::ToggleHelp => "Toggle help",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys; the character already carries case.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers - KeyModifiers::SHIFT,
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable key label ("Space", "Ctrl+E", "?").
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key.to_uppercase())
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    /// Maps key_binding to Action
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };
        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main view.
    ///
    /// Hex digits (0-9, a-f) and `#` are left unbound so they reach the hex field.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === PALETTE ===
        self.register(K::Char(' '), M::NONE, Action::RandomizeColor);
        self.register(K::Char('p'), M::NONE, Action::OpenColorPicker);
        self.register(K::Char('p'), M::CONTROL, Action::OpenColorPicker);
        self.register(K::Char('u'), M::CONTROL, Action::ClearInput);

        // === SWATCHES ===
        self.register(K::Left, M::NONE, Action::SelectPrevious);
        self.register(K::Right, M::NONE, Action::SelectNext);
        self.register(K::Char('h'), M::NONE, Action::SelectPrevious);
        self.register(K::Char('l'), M::NONE, Action::SelectNext);
        self.register(K::Home, M::NONE, Action::SelectFirst);
        self.register(K::End, M::NONE, Action::SelectLast);
        self.register(K::Enter, M::NONE, Action::CopyShade);
        self.register(K::Char('y'), M::NONE, Action::CopyShade);

        // === EXPORT ===
        self.register(K::Char('x'), M::NONE, Action::OpenExport);
        self.register(K::Char('e'), M::CONTROL, Action::OpenExport);

        // === HELP ===
        self.register(K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(K::Esc, M::NONE, Action::Quit);
        self.register(K::Char('q'), M::CONTROL, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert(binding, action);
    }

    /// Look up an action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&binding).copied()
    }

    /// All bindings of `action`, sorted by label.
    #[must_use]
    pub fn bindings_for(&self, action: Action) -> Vec<KeyBinding> {
        let mut bindings: Vec<KeyBinding> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(binding, _)| *binding)
            .collect();
        bindings.sort_by_key(KeyBinding::label);
        bindings
    }

    /// Joined key labels for `action`, e.g. "Ctrl+E / x".
    #[must_use]
    pub fn keys_label(&self, action: Action) -> String {
        self.bindings_for(action)
            .iter()
            .map(KeyBinding::label)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
