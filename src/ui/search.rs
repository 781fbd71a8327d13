//! Search Input UI
//!
//! Renders the title search box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title for the search box, depending on input state
pub fn search_title(query: &str, active: bool, match_count: Option<usize>, vim_mode: bool) -> String {
    if active {
        match match_count {
            Some(count) => format!(" Search ({} matches) - Esc to finish ", count),
            None => " Search - Esc to finish ".to_string(),
        }
    } else if !query.is_empty() {
        match match_count {
            Some(count) => format!(" Search ({} matches) - Esc to clear ", count),
            None => " Search - Esc to clear ".to_string(),
        }
    } else {
        let search_key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Search by title ({}) ", search_key)
    }
}

/// Render search input box
///
/// # Arguments
/// - `query`: Current search string
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Matching assets (None while nothing is loaded)
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: Option<usize>,
    vim_mode: bool,
) {
    let title = search_title(query, active, match_count, vim_mode);
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw(query),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else if query.is_empty() {
        Line::from(Span::styled(
            "Search by title",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(query, Style::default().fg(Color::Gray)))
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);
    f.render_widget(paragraph, area);
}

/// Render the locale selector box next to the search input
pub fn render_locale_box(f: &mut Frame, area: Rect, locale_name: &str, enabled: bool) {
    let style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Locale (L) ")
        .style(Style::default().fg(Color::Gray));

    let line = Line::from(vec![
        Span::styled(locale_name, style.add_modifier(Modifier::BOLD)),
        Span::styled(" ▾", style),
    ]);

    f.render_widget(Paragraph::new(vec![line]).block(block), area);
}
