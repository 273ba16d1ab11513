//! Search bar widget.
//!
//! Renders the search input while editing (with a visible caret) and a
//! compact read-only bar while a term is applied. Inactive renders
//! nothing; the layout gives the bar no space in that state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::SearchState;
use crate::view::styles::Palette;

/// Search bar widget projecting a [`SearchState`].
pub struct SearchBar<'a> {
    search: &'a SearchState,
    palette: Palette,
}

impl<'a> SearchBar<'a> {
    /// Create a search bar for the given state.
    pub fn new(search: &'a SearchState, palette: Palette) -> Self {
        Self { search, palette }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search {
            SearchState::Typing { buffer, cursor } => {
                // Split around the caret; the caret cell is drawn inverted.
                let before: String = buffer.chars().take(*cursor).collect();
                let mut after = buffer.chars().skip(*cursor);
                let caret = after
                    .next()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| " ".to_string());
                let rest: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(caret, self.palette.highlight()),
                    Span::raw(rest),
                ]);

                Paragraph::new(line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(self.palette.warn())
                            .title(" Search · Enter apply · Esc cancel "),
                    )
                    .render(area, buf);
            }
            SearchState::Active { term } => {
                Paragraph::new(Line::from(vec![
                    Span::raw(term.as_str().to_string()),
                    Span::styled("  (pagination hidden while filtering)", self.palette.dim()),
                ]))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.palette.accent())
                        .title(" Search · active · Esc clear "),
                )
                .render(area, buf);
            }
            SearchState::Inactive => {}
        }
    }
}
