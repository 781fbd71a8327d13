//! Asset Card Grid
//!
//! Cards are laid out row-major in a fixed number of columns. Only the rows
//! that fit are drawn; the window scrolls to keep the cursor visible.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Asset;
use crate::logic::formatting::{format_bytes, truncate_to_width};
use crate::logic::layout::first_visible_row;

/// Card height including borders
pub const CARD_HEIGHT: u16 = 5;

/// Placeholder cards shown while a fetch is in flight
pub const SKELETON_CARDS: usize = 3;

/// Text lines inside one card (title, file name, size/dimensions)
pub fn card_lines(asset: &Asset, width: usize) -> Vec<Line<'static>> {
    let title = if asset.title().is_empty() {
        "Untitled"
    } else {
        asset.title()
    };

    let file_line = match (asset.file_name(), asset.content_type()) {
        (Some(name), _) => name.to_string(),
        (None, Some(content_type)) => content_type.to_string(),
        (None, None) => String::new(),
    };

    let mut meta = Vec::new();
    if let Some(details) = asset.details() {
        if let Some(size) = details.size {
            meta.push(format_bytes(size));
        }
        if let Some(image) = details.image {
            meta.push(format!("{}×{}", image.width, image.height));
        }
    }

    vec![
        Line::from(Span::styled(
            truncate_to_width(title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&file_line, width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            truncate_to_width(&meta.join(" · "), width),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn grid_rows(area: Rect, columns: usize, visible_rows: usize) -> Vec<Vec<Rect>> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    rows.iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Render one page of asset cards
///
/// `is_selected` decides the check mark; `enabled` dims the whole grid when
/// the host disabled the field.
pub fn render_asset_grid<F>(
    f: &mut Frame,
    area: Rect,
    items: &[&Asset],
    cursor: usize,
    columns: usize,
    is_selected: F,
    enabled: bool,
) where
    F: Fn(&str) -> bool,
{
    let columns = columns.max(1);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let start_row = first_visible_row(cursor, columns, visible_rows);
    let cells = grid_rows(area, columns, visible_rows);

    for (row_offset, row_cells) in cells.iter().enumerate() {
        for (col, cell) in row_cells.iter().enumerate() {
            let index = (start_row + row_offset) * columns + col;
            let Some(asset) = items.get(index) else {
                return;
            };

            let selected = is_selected(asset.id());
            let focused = index == cursor;

            let border_color = if !enabled {
                Color::DarkGray
            } else if focused {
                Color::Yellow
            } else if selected {
                Color::Green
            } else {
                Color::Gray
            };
            let mut border_style = Style::default().fg(border_color);
            if focused {
                border_style = border_style.add_modifier(Modifier::BOLD);
            }

            let mut block = Block::default().borders(Borders::ALL).border_style(border_style);
            if selected {
                block = block.title(Span::styled(
                    " ✓ ",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ));
            }

            let inner_width = cell.width.saturating_sub(2) as usize;
            let card = Paragraph::new(card_lines(asset, inner_width)).block(block);
            f.render_widget(card, *cell);
        }
    }
}

/// Render placeholder cards while locales or assets are loading
pub fn render_skeleton(f: &mut Frame, area: Rect, columns: usize, message: &str) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", message))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let columns = columns.max(1);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let cells = grid_rows(inner, columns, visible_rows);
    let placeholder = Style::default().fg(Color::DarkGray);

    for (index, cell) in cells.iter().flatten().take(SKELETON_CARDS).enumerate() {
        let width = (cell.width.saturating_sub(2) as usize).max(1);
        let lines = vec![
            Line::from(Span::styled("░".repeat(width * 2 / 3), placeholder)),
            Line::from(Span::styled("░".repeat(width / 2), placeholder)),
            Line::from(Span::styled("░".repeat(width / (index + 3)), placeholder)),
        ];
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(placeholder),
        );
        f.render_widget(card, *cell);
    }
}
