use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What the legend needs to know about the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub can_retry: bool,
    pub has_locales: bool,
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: &LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if ctx.search_mode {
        hotkey_spans.extend(vec![
            key("Type"),
            Span::raw(":Filter titles  "),
            key("Backspace"),
            Span::raw(":Delete  "),
            key("^U"),
            Span::raw(":Clear  "),
            key("^S"),
            Span::raw(":Save  "),
            key("Esc/Enter"),
            Span::raw(":Done"),
        ]);
        return hotkey_spans;
    }

    if ctx.vim_mode {
        hotkey_spans.extend(vec![key("hjkl"), Span::raw(":Move  ")]);
    } else {
        hotkey_spans.extend(vec![key("←↑↓→"), Span::raw(":Move  ")]);
    }

    hotkey_spans.extend(vec![
        key("Space"),
        Span::raw(":Select  "),
        key("n/p"),
        Span::raw(":Page  "),
        key("z"),
        Span::raw(":Page size  "),
    ]);

    if ctx.has_search_query {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if ctx.vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
    }

    if ctx.has_locales {
        hotkey_spans.extend(vec![key("L"), Span::raw(":Locale  ")]);
    }

    if ctx.can_retry {
        hotkey_spans.extend(vec![key("r"), Span::raw(":Retry  ")]);
    }

    hotkey_spans.extend(vec![
        key("S/^S"),
        Span::raw(":Save  "),
        key("q"),
        Span::raw(":Cancel"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, ctx: &LegendContext) {
    let legend = Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: &LegendContext) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting =
        Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))]).wrap(Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
