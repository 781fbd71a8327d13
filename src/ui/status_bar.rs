use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Asset;
use crate::logic::formatting::{format_updated_at, truncate_to_width};
use crate::logic::thumbnail::{thumbnail_url, ThumbnailTransform};

/// Numbers shown in the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub matched: usize,
    pub renderable: usize,
    pub selected: usize,
}

/// Pagination line; page numbers are 1-based and never show "of 0"
pub fn build_status_line(info: &PageInfo, strategy: &str, updated_at: Option<&str>) -> String {
    let page_count = info.page_count.max(1);
    let page = (info.page_index + 1).min(page_count);

    let mut parts = vec![
        format!("Page {}/{}", page, page_count),
        format!("{} per page", info.page_size),
        format!("{} of {} assets", info.matched, info.renderable),
        format!("{} selected", info.selected),
        strategy.to_string(),
    ];
    if let Some(updated_at) = updated_at {
        parts.push(format!("Updated {}", format_updated_at(updated_at)));
    }
    parts.join(" │ ")
}

/// Render the bottom status bar
///
/// The bottom border carries the preview URL of the asset under the cursor.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    phase: &str,
    info: &PageInfo,
    strategy: &str,
    cursor_asset: Option<&Asset>,
    transform: &ThumbnailTransform,
) {
    let updated_at = cursor_asset.and_then(|a| a.sys.updated_at.as_deref());
    let status_line = build_status_line(info, strategy, updated_at);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", phase))
        .border_style(Style::default().fg(Color::Gray));

    if let Some(url) = cursor_asset.and_then(Asset::file_url) {
        let preview = thumbnail_url(url, transform);
        let width = area.width.saturating_sub(4) as usize;
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", truncate_to_width(&preview, width.saturating_sub(2))),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(status_line).block(block);
    f.render_widget(paragraph, area);
}
