//! Overlay rendering (detail pop-up, error notification, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{AppModel, ArtworkState, SearchResult, SlotKey, UiState};
use super::utils::centered_rect;

pub fn render_detail(frame: &mut Frame, result: &SearchResult, model: &AppModel) {
    let popup_area = centered_rect(frame.area(), 60, 14);

    frame.render_widget(Clear, popup_area);

    let artwork = match model.artwork.state(SlotKey::Detail) {
        Some(ArtworkState::Ready(art)) => {
            format!("{} artwork, {:.1} KB", art.format.label(), art.byte_len as f64 / 1024.0)
        }
        Some(ArtworkState::Loading) => "loading...".to_string(),
        Some(ArtworkState::Failed) => "unavailable".to_string(),
        None => "none".to_string(),
    };

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{:>8}  ", name), label),
            Span::styled(text, value),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            result.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(result.artist_display().to_string(), Style::default().fg(Color::Gray))),
        Line::from(""),
        row("Type", result.kind_display().to_string()),
        row("Genre", result.genre.clone()),
        row("Price", result.price_display()),
        row("Artwork", artwork),
        Line::from(""),
        row("Store", result.store_url.clone()),
    ];

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Detail (O to open in store, Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(detail, popup_area);
}

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        // Lines the message takes when wrapped
        let error_line_count = error_msg.chars().count().div_ceil(inner_width) as u16;

        let popup_area = centered_rect(area, popup_width, 2 + error_line_count.max(1));

        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Whoops... (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let keybindings = vec![
        ("", "── Search bar ──"),
        ("Type", "Edit search text"),
        ("← / →", "Switch category"),
        ("Enter", "Search"),
        ("Esc", "Clear text"),
        ("", ""),
        ("", "── Results ──"),
        ("↑ / ↓", "Move selection"),
        ("← / →", "Previous / next grid page"),
        ("Enter", "Show detail"),
        ("O", "Open detail item in the store"),
        ("G", "Toggle list / grid"),
        ("Esc", "Cancel a running search"),
        ("", ""),
        ("", "── General ──"),
        ("Tab", "Switch between search and results"),
        ("?", "Toggle this help"),
        ("Q / Ctrl+Q", "Quit"),
    ];

    let popup_area = centered_rect(frame.area(), 62, keybindings.len() as u16 + 2);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (? or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
