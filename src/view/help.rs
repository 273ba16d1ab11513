//! Help overlay rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::view::constants::HELP_POPUP_WIDTH_COLS;
use crate::view::styles::Palette;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k ↑/↓", "move between cards"),
    ("Enter", "open card detail"),
    ("Esc", "close overlay / cancel search"),
    ("/", "search the loaded page"),
    ("n/p ←/→", "next / previous page"),
    ("g/G", "first / last card"),
    ("r", "retry the current page"),
    ("R", "hard reload (page 1, filters cleared)"),
    ("?", "toggle this help"),
    ("q, Ctrl-C", "quit"),
];

/// Render the centered help overlay listing the default key bindings.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(HELP_POPUP_WIDTH_COLS, BINDINGS.len() as u16 + 2, frame.area());
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<11}"), palette.accent()),
                Span::raw(*what),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Help ", palette.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(paragraph, area);
}

/// Centered rect with fixed dimensions, clamped to the screen.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
