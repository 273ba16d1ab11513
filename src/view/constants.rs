//! Layout dimension constants for TUI rendering.
//!
//! Centralized numeric values so spacing stays consistent across the
//! application.

/// Height of the title header in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status strip (status dot, page, total) in lines.
pub const STATUS_STRIP_HEIGHT: u16 = 1;

/// Height of the search bar when open (border + input line).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the pagination bar in lines.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the bottom status bar (key hints) in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Number of placeholder cards shown while a page fetch is in flight.
pub const SKELETON_CARDS: usize = 8;

/// Width percentage of the screen used by the detail overlay.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 80;

/// Height percentage of the screen used by the detail overlay.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Fixed column width of the help overlay.
pub const HELP_POPUP_WIDTH_COLS: u16 = 52;
