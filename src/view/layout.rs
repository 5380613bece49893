//! Layout rendering (search bar, category selector)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, Category, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(40), // Category selector
        ])
        .split(area);

    let focused = ui_state.active_section == ActiveSection::Search;
    let accent = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let search_text = if ui_state.search_query.is_empty() {
        "App name, artist, song, album, e-book"
    } else {
        &ui_state.search_query
    };

    let search_style = if ui_state.search_query.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(accent),
        );
    frame.render_widget(search, chunks[0]);

    // Segmented category control
    let mut spans = Vec::new();
    for (i, category) in Category::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *category == ui_state.category {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(category.label(), style));
    }

    let categories = Paragraph::new(Line::from(spans)).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Category (←/→) ")
            .border_style(accent),
    );
    frame.render_widget(categories, chunks[1]);
}
