//! Search input state machine and page-scoped filtering.
//!
//! Searching never touches the network and never changes the page: the
//! active term derives a filtered view over the records already loaded.
//! The input machine is a sum type so exactly one of "no filter",
//! "editing" and "applied" holds at a time.

use crate::model::Attraction;

// ===== SearchState =====

/// Search interaction state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No filter active.
    Inactive,
    /// User is editing the query. The filter is not applied until submit;
    /// `cursor` counts characters, not bytes.
    Typing {
        /// Text entered so far.
        buffer: String,
        /// Caret position in characters.
        cursor: usize,
    },
    /// A non-empty term is applied to the loaded page.
    Active {
        /// The submitted, validated term.
        term: SearchTerm,
    },
}

// ===== SearchTerm =====

/// Validated, trimmed search term. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Smart constructor: trims and rejects empty or whitespace-only
    /// input, so an `Active` state always carries a real term.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed))
        }
    }

    /// The term text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Filtering =====

/// Filter the loaded page down to records whose name, address, or
/// introduction contains `term` as a case-insensitive substring.
///
/// An empty or whitespace-only term returns the page unchanged, in
/// order. Filtering is scoped to the given slice; it never looks past
/// the currently loaded page.
pub fn filter_attractions<'a>(attractions: &'a [Attraction], term: &str) -> Vec<&'a Attraction> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return attractions.iter().collect();
    }

    attractions
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&needle)
                || a.address.to_lowercase().contains(&needle)
                || a.introduction.to_lowercase().contains(&needle)
        })
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
