//! Main content area rendering (result list and grid)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{
    ActiveSection, AppModel, DisplayMode, SearchResult, SearchState, GRID_COLUMNS, GRID_PAGE_SIZE,
    GRID_ROWS,
};
use super::utils::{artwork_marker, truncate_string};

pub fn render_main_content(frame: &mut Frame, area: Rect, model: &AppModel) {
    let is_focused = model.ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let message = match model.search_state() {
        SearchState::NotSearchedYet => Some((
            "Type in search and press Enter to look up the store\n\nUse ←/→ in the search bar to pick a category\nUse Tab to move between search and results\nPress ? for help",
            Color::DarkGray,
        )),
        SearchState::Loading => Some(("Loading...", Color::Yellow)),
        SearchState::NoResults => Some(("(Nothing found)", Color::White)),
        SearchState::Results(_) => None,
    };

    if let Some((text, color)) = message {
        let content = Paragraph::new(text)
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(content, area);
        return;
    }

    match model.ui_state.display_mode {
        DisplayMode::List => render_result_list(frame, area, model, border_style),
        DisplayMode::Grid => render_result_grid(frame, area, model, border_style),
    }
}

fn render_result_list(frame: &mut Frame, area: Rect, model: &AppModel, border_style: Style) {
    let results = model.results();
    let selected = model.ui_state.selected;

    // " ■ " + name + "  " + artist + "  " + kind
    let content_width = area.width.saturating_sub(4) as usize;
    let kind_width = 12;
    let remaining = content_width.saturating_sub(3 + 2 + 2 + kind_width);
    let name_width = remaining * 55 / 100;
    let artist_width = remaining.saturating_sub(name_width);

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let (marker, marker_style) = artwork_marker(model, i);
            let is_selected = i == selected;
            let name_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", marker), marker_style),
                Span::styled(truncate_string(&result.name, name_width), name_style),
                Span::raw("  "),
                Span::styled(
                    truncate_string(result.artist_display(), artist_width),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw("  "),
                Span::styled(
                    truncate_string(result.kind_display(), kind_width),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Results ({}) ", results.len()))
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::Rgb(20, 60, 60)));

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_result_grid(frame: &mut Frame, area: Rect, model: &AppModel, border_style: Style) {
    let page = model.grid_page();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results, page {} of {} (←/→) ", page + 1, model.grid_page_count()))
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
        .split(inner);

    let start = page * GRID_PAGE_SIZE;
    for (row, row_area) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (column, tile_area) in columns.iter().enumerate() {
            let index = start + row * GRID_COLUMNS + column;
            if let Some(result) = model.results().get(index) {
                render_tile(frame, *tile_area, model, index, result);
            }
        }
    }
}

fn render_tile(frame: &mut Frame, area: Rect, model: &AppModel, index: usize, result: &SearchResult) {
    let is_selected = index == model.ui_state.selected;
    let (marker, marker_style) = artwork_marker(model, index);
    let width = area.width.saturating_sub(2) as usize;

    let lines = vec![
        Line::from(Span::styled(marker, marker_style)).centered(),
        Line::from(Span::styled(
            truncate_string(&result.name, width).trim_end().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_string(result.artist_display(), width).trim_end().to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let border = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let tile = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(tile, area);
}
