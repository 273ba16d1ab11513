//! Card list rendering: attraction cards, loading skeletons, and the
//! empty/error panels that replace them.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::Attraction;
use crate::view::constants::SKELETON_CARDS;
use crate::view::styles::Palette;

/// Clamp a string to `max` terminal columns, appending an ellipsis when
/// anything was cut. Width-aware so CJK text truncates cleanly.
fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Collapse CMS whitespace runs (CR/LF, tabs) into single spaces.
fn flatten(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the filtered page as a selectable card list.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    attractions: &[&Attraction],
    cursor: usize,
    palette: &Palette,
) {
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = attractions
        .iter()
        .map(|attraction| {
            let mut title_spans = vec![Span::styled(
                truncate_to_width(&attraction.name, text_width),
                palette.accent(),
            )];
            if let Some(category) = attraction.primary_category() {
                title_spans.push(Span::styled(format!("  [{category}]"), palette.dim()));
            }

            let lines = vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    truncate_to_width(&flatten(&attraction.address), text_width),
                    palette.dim(),
                )),
                Line::from(Span::raw(truncate_to_width(
                    &flatten(&attraction.introduction),
                    text_width,
                ))),
                Line::from(""),
            ];
            ListItem::new(lines)
        })
        .collect();

    let count = attractions.len();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Attractions · {count} shown ")),
        )
        .highlight_style(palette.highlight())
        .highlight_symbol("▌ ");

    let selected = if count == 0 { 0 } else { cursor.min(count - 1) };
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Render placeholder cards while a fetch is in flight.
pub fn render_skeletons(frame: &mut Frame, area: Rect, palette: &Palette) {
    let items: Vec<ListItem> = (0..SKELETON_CARDS)
        .map(|_| {
            let lines = vec![
                Line::from(Span::styled("░░░░░░░░░░░░░░░░░░", palette.dim())),
                Line::from(Span::styled("░░░░░░░░░░░░", palette.dim())),
                Line::from(Span::styled("░░░░░░░░░░░░░░░░░░░░░░░░░░", palette.dim())),
                Line::from(""),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Attractions · fetching… "),
    );
    frame.render_widget(list, area);
}

/// Render the "no records" panel: either the page is empty or the active
/// search term matched nothing.
pub fn render_empty_panel(
    frame: &mut Frame,
    area: Rect,
    search_term: Option<&str>,
    palette: &Palette,
) {
    let lines = match search_term {
        Some(term) => vec![
            Line::from(""),
            Line::from(Span::styled("No results", palette.title())),
            Line::from(""),
            Line::from(format!(
                "Nothing on this page matches \"{term}\"."
            )),
            Line::from(Span::styled(
                "Try another keyword, or press Esc to clear the search.",
                palette.dim(),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled("Nothing here", palette.title())),
            Line::from(""),
            Line::from("This page has no attractions."),
            Line::from(Span::styled("Press p for the previous page.", palette.dim())),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Attractions "));
    frame.render_widget(paragraph, area);
}

/// Render the failure panel with the classified guidance message and the
/// recovery affordances.
pub fn render_error_panel(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Connection failed", palette.error())),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "r retry · R hard reload",
            palette.dim(),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.error())
                .title(" Attractions "),
        );
    frame.render_widget(paragraph, area);
}
