//! Application state and transitions.
//!
//! `AppState` is the single owner of everything the UI shows: the loaded
//! page, the status machine, the search filter, the detail selection, and
//! the card cursor. All mutations funnel through named transitions; the
//! rendering layer only reads.
//!
//! # Status machine
//!
//! `Loading → {Idle, Empty, Error}`; any page change, retry, or hard
//! reload re-enters `Loading`. The machine has no terminal state; every
//! error is retriable for the same page.

use crate::api::FetchError;
use crate::model::{ApiResponse, Attraction, PAGE_SIZE};
use crate::state::search::{filter_attractions, SearchState};

/// Guidance shown when both transports were unreachable at the network
/// level, typically a connectivity outage or a cross-origin restriction.
pub const CONNECTIVITY_GUIDANCE: &str = "Could not reach the Taipei Travel API. This is usually a \
network outage or a cross-origin restriction; the relay transport was already tried. Check the \
connection and press r to retry.";

/// Guidance shown when either transport answered HTTP 401.
pub const AUTH_GUIDANCE: &str =
    "The API rejected the request with HTTP 401. The API key may have expired and needs renewal.";

/// Derive the user-facing message for a failed load.
///
/// The state machine is the sole classification authority: connectivity
/// failures and credential rejections get fixed guidance templates,
/// everything else gets a generic template embedding the error's own
/// display text (which keeps the upstream kind strings).
pub fn classify_error(err: &FetchError) -> String {
    if err.is_unreachable() {
        CONNECTIVITY_GUIDANCE.to_string()
    } else if err.is_unauthorized() {
        AUTH_GUIDANCE.to_string()
    } else {
        format!("The request failed ({err}). Press r to retry, or R to reload from page 1.")
    }
}

/// What the content area is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// A page fetch is in flight; placeholder cards are shown.
    Loading,
    /// The current page loaded with at least one record.
    Idle,
    /// The current page loaded but contained no records.
    Empty,
    /// The last fetch failed; `error_message` holds the guidance text.
    Error,
}

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Records of the currently loaded page. Replaced wholesale on load,
    /// never merged.
    attractions: Vec<Attraction>,
    /// Count of attractions across all pages as reported by the API;
    /// 0 when unknown. Display only; pagination never consults it.
    total_count: u64,
    /// Current server page, 1-based.
    page: u32,
    /// Status machine driving what the content area renders.
    status: LoadStatus,
    /// User-facing guidance, populated only in `Error`.
    error_message: Option<String>,
    /// Search input machine; the active term filters the loaded page.
    pub search: SearchState,
    /// Record shown in the detail overlay. A cloned value, so a page
    /// load cannot dangle an open overlay.
    selected: Option<Attraction>,
    /// Card cursor, an index into the filtered list.
    cursor: usize,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
    /// Monotonic fetch sequence. Outcomes carrying an older number are
    /// from superseded requests and are dropped.
    request_seq: u64,
}

impl AppState {
    /// Create state positioned at `page` (clamped to ≥ 1), in `Loading`.
    /// The first fetch is expected to be started immediately by the shell.
    pub fn new(page: u32) -> Self {
        Self {
            attractions: Vec::new(),
            total_count: 0,
            page: page.max(1),
            status: LoadStatus::Loading,
            error_message: None,
            search: SearchState::Inactive,
            selected: None,
            cursor: 0,
            help_visible: false,
            request_seq: 0,
        }
    }

    // ===== Accessors =====

    /// Records of the currently loaded page, unfiltered.
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Reported total across all pages; 0 when unknown.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Current server page, 1-based.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Current status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Guidance text for the error panel, when in `Error`.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Record shown in the detail overlay, when open.
    pub fn selected(&self) -> Option<&Attraction> {
        self.selected.as_ref()
    }

    /// Card cursor position within the filtered list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The sequence number the next applied outcome must carry.
    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    /// The active (submitted) search term, if any. A term being typed but
    /// not yet submitted does not filter.
    pub fn active_search_term(&self) -> Option<&str> {
        match &self.search {
            SearchState::Active { term } => Some(term.as_str()),
            _ => None,
        }
    }

    /// The loaded page filtered by the active search term, in page order.
    pub fn filtered(&self) -> Vec<&Attraction> {
        filter_attractions(&self.attractions, self.active_search_term().unwrap_or(""))
    }

    // ===== Fetch transitions =====

    /// Enter `Loading` for the current page and allocate a new request
    /// sequence number. Clears any previous error. Returns the sequence
    /// number the spawned fetch must report back with.
    pub fn load_started(&mut self) -> u64 {
        self.status = LoadStatus::Loading;
        self.error_message = None;
        self.request_seq += 1;
        self.request_seq
    }

    /// Apply a completed fetch outcome.
    ///
    /// Outcomes whose sequence number is not current are from superseded
    /// requests and are dropped; returns `false` for those, `true` when
    /// the state changed.
    ///
    /// A success carrying `data: null` is treated as a failure with kind
    /// `EMPTY_RESPONSE`. A success with records enters `Idle`, an empty
    /// page enters `Empty`, and either resets the cursor to the top (the
    /// list-scroll equivalent of the original's scroll-to-top).
    pub fn apply_fetch(&mut self, seq: u64, result: Result<ApiResponse, FetchError>) -> bool {
        if seq != self.request_seq {
            return false;
        }

        match result {
            Ok(response) => match response.data {
                Some(records) => {
                    self.total_count = response.total.unwrap_or(0);
                    self.status = if records.is_empty() {
                        LoadStatus::Empty
                    } else {
                        LoadStatus::Idle
                    };
                    self.attractions = records;
                    self.error_message = None;
                    self.cursor = 0;
                }
                None => self.enter_error(FetchError::MissingData),
            },
            Err(err) => self.enter_error(err),
        }
        true
    }

    fn enter_error(&mut self, err: FetchError) {
        self.status = LoadStatus::Error;
        self.error_message = Some(classify_error(&err));
    }

    // ===== Pagination =====

    /// Whether another page is assumed to exist. Heuristic: a full page
    /// means there is probably more; anything shorter is taken as the
    /// last page. The reported total is deliberately not consulted.
    pub fn can_next_page(&self) -> bool {
        self.attractions.len() >= PAGE_SIZE
    }

    /// Whether a previous page exists.
    pub fn can_prev_page(&self) -> bool {
        self.page > 1
    }

    /// Whether pagination controls apply right now: only in `Idle` and
    /// only while no search term is active (filtering is page-scoped, so
    /// paging under a filter would be misleading).
    pub fn pagination_visible(&self) -> bool {
        self.status == LoadStatus::Idle && self.active_search_term().is_none()
    }

    /// Advance to the next page if the controls are applicable and the
    /// heuristic allows. Returns `true` when the page changed; the caller
    /// is expected to start a load.
    pub fn next_page(&mut self) -> bool {
        if self.pagination_visible() && self.can_next_page() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page if the controls are applicable and not already at
    /// page 1. Returns `true` when the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.pagination_visible() && self.can_prev_page() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Reset to page 1, clear search, selection, and cursor. The caller
    /// is expected to start a load. TUI rendition of the original's
    /// force-reload button.
    pub fn hard_reload(&mut self) {
        self.page = 1;
        self.search = SearchState::Inactive;
        self.selected = None;
        self.cursor = 0;
    }

    // ===== Selection and cursor =====

    /// Open the detail overlay for the card under the cursor, if any.
    pub fn select_under_cursor(&mut self) {
        let choice = {
            let filtered = self.filtered();
            if filtered.is_empty() {
                None
            } else {
                Some(filtered[self.cursor.min(filtered.len() - 1)].clone())
            }
        };
        if let Some(attraction) = choice {
            self.selected = Some(attraction);
        }
    }

    /// Close the detail overlay.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the card cursor up one row, saturating at the top.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the card cursor down one row, clamped to the filtered list.
    pub fn cursor_down(&mut self) {
        let max = self.filtered().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(max);
    }

    /// Jump the cursor to the first card.
    pub fn cursor_to_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump the cursor to the last card of the filtered list.
    pub fn cursor_to_last(&mut self) {
        self.cursor = self.filtered().len().saturating_sub(1);
    }

    /// Reset the cursor to the top. Called when the filter changes, so
    /// the cursor never points past a shrunken list.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
