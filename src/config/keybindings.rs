//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Ships vim-flavored defaults; a config-file override hook is reserved
/// in `ConfigFile::keybindings` but not wired yet. Esc and text entry
/// while the search bar is open are routed contextually by the event
/// loop before this map is consulted.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Card cursor
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::CursorDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::CursorUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::CursorDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::CursorUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::CursorFirst,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::CursorFirst,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::CursorLast,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::CursorLast,
        );

        // Pagination
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::PrevPage,
        );

        // Detail overlay
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::OpenDetail,
        );

        // Search
        bindings.insert(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            KeyAction::StartSearch,
        );

        // Recovery
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::Retry,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT),
            KeyAction::HardReload,
        );

        // Application
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
