//! Domain-level keyboard actions independent of key bindings.

/// User intents that can be mapped to configurable key bindings.
///
/// These represent what the user wants done, not which key was pressed.
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// `config::KeyBindings`; Esc and text entry while the search bar is open
/// are handled contextually before binding dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Card list navigation
    /// Move the card cursor up one row. Default: k/↑
    CursorUp,
    /// Move the card cursor down one row. Default: j/↓
    CursorDown,
    /// Jump the cursor to the first card. Default: g/Home
    CursorFirst,
    /// Jump the cursor to the last card. Default: G/End
    CursorLast,

    // Pagination
    /// Fetch the next server page. Gated by the page-size heuristic. Default: n/→
    NextPage,
    /// Fetch the previous server page. Gated at page 1. Default: p/←
    PrevPage,

    // Detail overlay
    /// Open the detail overlay for the card under the cursor. Default: Enter
    OpenDetail,

    // Search
    /// Open the search input. Default: /
    StartSearch,

    // Recovery
    /// Re-fetch the current page. Default: r
    Retry,
    /// Reset to page 1, clear search and selection, re-fetch. Default: R
    HardReload,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q (Ctrl+C always works)
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_compare_by_variant() {
        assert_eq!(KeyAction::Retry, KeyAction::Retry);
        assert_ne!(KeyAction::Retry, KeyAction::HardReload);
        assert_ne!(KeyAction::NextPage, KeyAction::PrevPage);
    }

    #[test]
    fn actions_are_copy() {
        let action = KeyAction::OpenDetail;
        let copied = action;
        assert_eq!(action, copied);
    }
}
