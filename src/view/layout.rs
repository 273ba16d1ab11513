//! Screen layout rendering.
//!
//! Projects `AppState` onto the frame: title header, status strip,
//! optional search bar, the content area (cards, skeletons, empty or
//! error panel, depending on status), optional pagination bar, key-hint
//! status bar, and the overlays on top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, LoadStatus, SearchState};
use crate::view::constants::{
    HEADER_HEIGHT, PAGINATION_BAR_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
    STATUS_STRIP_HEIGHT,
};
use crate::view::search_input::SearchBar;
use crate::view::styles::Palette;
use crate::view::{cards, detail, help};

/// Render the whole screen from the current state.
pub fn render_layout(frame: &mut Frame, state: &AppState) {
    let palette = Palette::from_env();

    let search_open = !matches!(state.search, SearchState::Inactive);
    let show_pagination = state.pagination_visible();

    let mut constraints = vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(STATUS_STRIP_HEIGHT),
    ];
    if search_open {
        constraints.push(Constraint::Length(SEARCH_BAR_HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    if show_pagination {
        constraints.push(Constraint::Length(PAGINATION_BAR_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut idx = 0;
    render_header(frame, chunks[idx], &palette);
    idx += 1;
    render_status_strip(frame, chunks[idx], state, &palette);
    idx += 1;

    if search_open {
        frame.render_widget(SearchBar::new(&state.search, palette), chunks[idx]);
        idx += 1;
    }

    render_content(frame, chunks[idx], state, &palette);
    idx += 1;

    if show_pagination {
        render_pagination_bar(frame, chunks[idx], state, &palette);
        idx += 1;
    }
    render_status_bar(frame, chunks[idx], state, &palette);

    // Overlays render last so they sit on top of the page.
    if let Some(attraction) = state.selected() {
        detail::render_detail_overlay(frame, attraction, &palette);
    }
    if state.help_visible {
        help::render_help_overlay(frame, &palette);
    }
}

/// Dispatch the content area on the load status.
fn render_content(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    match state.status() {
        LoadStatus::Loading => cards::render_skeletons(frame, area, palette),
        LoadStatus::Error => cards::render_error_panel(
            frame,
            area,
            state.error_message().unwrap_or("Unknown error."),
            palette,
        ),
        LoadStatus::Idle | LoadStatus::Empty => {
            let filtered = state.filtered();
            if filtered.is_empty() {
                cards::render_empty_panel(frame, area, state.active_search_term(), palette);
            } else {
                cards::render_cards(frame, area, &filtered, state.cursor(), palette);
            }
        }
    }
}

/// Title header line.
fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled(" TAIPEI ", palette.highlight()),
        Span::styled(" City Attractions", palette.title()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Status strip: colored status dot and label, page number, total count.
fn render_status_strip(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let (dot_style, label) = match state.status() {
        LoadStatus::Loading => (palette.warn(), "Fetching data…"),
        LoadStatus::Error => (palette.error(), "API connection failed"),
        LoadStatus::Idle | LoadStatus::Empty => (palette.ok(), "Catalog up to date"),
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("●", dot_style),
        Span::raw(" "),
        Span::raw(label),
        Span::styled(
            format!("   ·   Page {}   ·   Total {}", state.page(), state.total_count()),
            palette.dim(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Pagination bar. Only rendered while applicable; controls that do not
/// apply (first page, short page) are dimmed.
fn render_pagination_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let prev_style = if state.can_prev_page() {
        palette.accent()
    } else {
        palette.dim()
    };
    let next_style = if state.can_next_page() {
        palette.accent()
    } else {
        palette.dim()
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("◀ p Prev", prev_style),
        Span::raw(format!("   Page {}   ", state.page())),
        Span::styled("Next n ▶", next_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Bottom key-hint bar, context sensitive like the panes above it.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let hints = match state.status() {
        LoadStatus::Error => " r retry · R hard reload · q quit",
        _ if state.selected().is_some() => " Esc close detail · q quit",
        _ if matches!(state.search, SearchState::Typing { .. }) => {
            " Enter apply search · Esc cancel"
        }
        _ => " q quit · / search · j/k select · Enter detail · ? help",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, palette.dim())),
        area,
    );
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
