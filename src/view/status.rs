//! Bottom status line

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{AppModel, DisplayMode, SearchState};

pub fn render_status_line(frame: &mut Frame, area: Rect, model: &AppModel) {
    let state_text = match model.search_state() {
        SearchState::NotSearchedYet => "Ready".to_string(),
        SearchState::Loading => format!("Searching {}...", model.ui_state.category.label()),
        SearchState::NoResults => "Nothing found".to_string(),
        SearchState::Results(list) => format!("{} results", list.len()),
    };

    let mode_text = match model.ui_state.display_mode {
        DisplayMode::List => "List",
        DisplayMode::Grid => "Grid",
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", state_text), Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(format!(" {} ", mode_text), Style::default().fg(Color::Cyan)),
        Span::styled(
            "Enter search/open · g grid · ? help · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
