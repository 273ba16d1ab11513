//! Search input handling (pure state transitions).
//!
//! Text editing for the `SearchState::Typing` variant. All functions are
//! pure and total; states they do not apply to pass through unchanged.
//! Cursor positions count characters so CJK input edits correctly.

use crate::state::search::{SearchState, SearchTerm};

/// Byte offset of the `char_idx`-th character, or the end of the string.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Insert a character at the caret and advance it.
pub fn handle_char_input(state: SearchState, ch: char) -> SearchState {
    match state {
        SearchState::Typing { mut buffer, cursor } => {
            let at = byte_index(&buffer, cursor);
            buffer.insert(at, ch);
            SearchState::Typing {
                buffer,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the caret, if any.
pub fn handle_backspace(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { mut buffer, cursor } => {
            if cursor > 0 {
                let at = byte_index(&buffer, cursor - 1);
                buffer.remove(at);
                SearchState::Typing {
                    buffer,
                    cursor: cursor - 1,
                }
            } else {
                SearchState::Typing { buffer, cursor }
            }
        }
        other => other,
    }
}

/// Move the caret left, saturating at the start.
pub fn handle_cursor_left(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { buffer, cursor } => SearchState::Typing {
            buffer,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move the caret right, saturating at the end.
pub fn handle_cursor_right(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { buffer, cursor } => {
            let max = buffer.chars().count();
            SearchState::Typing {
                buffer,
                cursor: (cursor + 1).min(max),
            }
        }
        other => other,
    }
}

/// Open the search input.
///
/// From `Inactive` starts with an empty buffer; from `Active` re-opens
/// the applied term for editing with the caret at the end. Already
/// typing is a no-op.
pub fn activate_search_input(state: SearchState) -> SearchState {
    match state {
        SearchState::Inactive => SearchState::Typing {
            buffer: String::new(),
            cursor: 0,
        },
        SearchState::Active { term } => {
            let buffer = term.as_str().to_string();
            let cursor = buffer.chars().count();
            SearchState::Typing { buffer, cursor }
        }
        typing => typing,
    }
}

/// Cancel the search: any state collapses to `Inactive`, which also
/// drops an applied filter.
pub fn cancel_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { .. } | SearchState::Active { .. } => SearchState::Inactive,
        SearchState::Inactive => SearchState::Inactive,
    }
}

/// Submit the typed query.
///
/// A valid (non-empty after trimming) buffer becomes the applied term; an
/// empty one clears the filter. Only meaningful while typing.
pub fn submit_search(state: SearchState) -> SearchState {
    match state {
        SearchState::Typing { buffer, .. } => match SearchTerm::new(buffer) {
            Some(term) => SearchState::Active { term },
            None => SearchState::Inactive,
        },
        other => other,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
