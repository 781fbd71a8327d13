use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::Locale;
use crate::config::ConfigError;
use crate::model::{DialogError, FetchStage};

use super::layout::centered_rect;

/// Render the locale selection popup
pub fn render_locale_picker(
    f: &mut Frame,
    locales: &[Locale],
    active_code: &str,
    state: &mut ListState,
) {
    let items: Vec<ListItem> = locales
        .iter()
        .map(|locale| {
            let marker = if locale.code == active_code { "● " } else { "  " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(locale.name.clone()),
                Span::styled(
                    format!(" ({})", locale.code),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if locale.default {
                spans.push(Span::styled(" default", Style::default().fg(Color::Cyan)));
            }
            ListItem::new(Line::from(spans)).style(Style::default().fg(Color::White))
        })
        .collect();

    let menu_height = (locales.len() as u16 + 2).min(20);
    let menu_area = centered_rect(f.area(), 60, menu_height);

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select Locale (↑↓ to navigate, Enter to apply, Esc to cancel)")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, state);
}

/// Title and body text for an error panel
pub fn error_text(error: &DialogError) -> (String, Vec<String>) {
    match error {
        DialogError::Configuration(ConfigError::MissingParameters(missing)) => (
            "Configuration error".to_string(),
            vec![
                format!("Missing parameters: {}", missing.join(", ")),
                "Set them in the config file, via flags, or in the environment.".to_string(),
            ],
        ),
        DialogError::Fetch { stage, kind, message } => {
            let what = match stage {
                FetchStage::Locales => "locales",
                FetchStage::Assets => "assets",
            };
            (
                format!("Failed to load {}", what),
                vec![
                    format!("{}: {}", kind.label(), message),
                    "Press r to retry.".to_string(),
                ],
            )
        }
    }
}

/// Render a configuration or fetch error inside the content area
pub fn render_error_panel(f: &mut Frame, area: Rect, error: &DialogError) {
    let (title, body) = error_text(error);

    let mut lines = vec![Line::from("")];
    for text in body {
        lines.push(Line::from(text));
    }

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" ✗ {} ", title))
                .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(panel, area);
}

/// Render an informational empty state (no locales, no assets, no matches)
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::Gray))),
    ];

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::errors::ErrorType;

    #[test]
    fn test_configuration_error_lists_parameters() {
        let error = DialogError::Configuration(ConfigError::MissingParameters(vec![
            "space_id",
            "delivery_api_token",
        ]));
        let (title, body) = error_text(&error);
        assert_eq!(title, "Configuration error");
        assert_eq!(body[0], "Missing parameters: space_id, delivery_api_token");
        assert!(!body.iter().any(|line| line.contains("retry")));
    }

    #[test]
    fn test_fetch_error_offers_retry() {
        let error = DialogError::Fetch {
            stage: FetchStage::Assets,
            kind: ErrorType::Unauthorized,
            message: "API error 401: bad token".to_string(),
        };
        let (title, body) = error_text(&error);
        assert_eq!(title, "Failed to load assets");
        assert!(body[0].ends_with("API error 401: bad token"));
        assert_eq!(body[1], "Press r to retry.");
    }
}
