use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Informational note at the top
    pub banner_area: Rect,
    /// Locale selector (left part of the controls row)
    pub locale_area: Rect,
    /// Search input (right part of the controls row)
    pub search_area: Rect,
    /// Card grid, loading skeleton, or empty/error panel
    pub content_area: Rect,
    /// Pagination and cursor details
    pub status_area: Rect,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Banner (top border, text, bottom border)
            Constraint::Length(3),             // Locale + search row
            Constraint::Min(3),                // Content area
            Constraint::Length(3),             // Status bar
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
        ])
        .split(terminal_size);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_chunks[1]);

    LayoutInfo {
        banner_area: main_chunks[0],
        locale_area: controls[0],
        search_area: controls[1],
        content_area: main_chunks[2],
        status_area: main_chunks[3],
        legend_area: main_chunks[4],
    }
}

/// Centered popup rect, clamped to the frame
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
