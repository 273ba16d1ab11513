//! Detail overlay rendering.
//!
//! TUI rendition of the original's detail modal: a centered overlay with
//! the full record: categories, contact fields, publication data, and
//! the wrapped introduction text.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::Attraction;
use crate::view::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use crate::view::styles::Palette;

/// Render the centered detail overlay for `attraction`.
///
/// Clears the backdrop first so the card list does not bleed through.
pub fn render_detail_overlay(frame: &mut Frame, attraction: &Attraction, palette: &Palette) {
    let area = centered_rect(
        DETAIL_POPUP_WIDTH_PERCENT,
        DETAIL_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();

    if !attraction.category.is_empty() {
        let tags = attraction
            .category
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(" · ");
        lines.push(Line::from(Span::styled(tags, palette.accent())));
        lines.push(Line::from(""));
    }

    if !attraction.address.is_empty() {
        lines.push(field_line("Address", &attraction.address, palette));
    }
    if let Some(tel) = &attraction.tel {
        lines.push(field_line("Phone", tel, palette));
    }
    if let Some(open_time) = &attraction.open_time {
        lines.push(field_line("Hours", open_time, palette));
    }
    if let Some(url) = &attraction.url {
        lines.push(field_line("Website", url, palette));
    }
    if let Some(image) = attraction.first_image() {
        let label = format!("{} published · {}", attraction.images.len(), image);
        lines.push(field_line("Images", &label, palette));
    }
    let updated = attraction
        .modified_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| attraction.modified.clone());
    if !updated.is_empty() {
        lines.push(field_line("Updated", &updated, palette));
    }

    lines.push(Line::from(""));
    for paragraph in attraction.introduction.split("\r\n\r\n") {
        let text = paragraph.trim();
        if !text.is_empty() {
            lines.push(Line::from(text.to_string()));
            lines.push(Line::from(""));
        }
    }

    let title = if attraction.name.is_empty() {
        " Attraction ".to_string()
    } else {
        format!(" {} ", attraction.name)
    };

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(title, palette.title()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(body, area);

    // Footer hint inside the bottom border, mirroring the card list hints.
    let footer_area = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(1),
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let footer = Paragraph::new(Span::styled("Esc or Enter: close", palette.dim()))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

fn field_line<'a>(label: &'a str, value: &str, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<9}"), palette.dim()),
        Span::raw(value.to_string()),
    ])
}

/// Centered rect sized as a percentage of the full area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
