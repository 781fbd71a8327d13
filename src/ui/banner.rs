use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Note shown above the picker
pub const APPEND_NOTE: &str = "Assets selected will be appended to the current asset selection.";

/// Render the informational banner with the running selection count
pub fn render_banner(f: &mut Frame, area: Rect, selected_count: usize) {
    let line = Line::from(vec![
        Span::styled("ℹ ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(APPEND_NOTE),
    ]);

    let title = format!(" Add existing assets ({} selected) ", selected_count);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(vec![line]).block(block), area);
}
