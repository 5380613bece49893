//! Utility functions for rendering UI components

use ratatui::{layout::Rect, style::{Color, Style}};

use crate::model::{ArtworkState, AppModel};

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Short marker standing in for the artwork of result `index`
pub fn artwork_marker(model: &AppModel, index: usize) -> (&'static str, Style) {
    let state = model
        .slot_for(index)
        .and_then(|slot| model.artwork.state(slot));
    match state {
        Some(ArtworkState::Ready(_)) => ("■", Style::default().fg(Color::Cyan)),
        Some(ArtworkState::Loading) => ("…", Style::default().fg(Color::DarkGray)),
        Some(ArtworkState::Failed) => ("×", Style::default().fg(Color::Red)),
        None => (" ", Style::default()),
    }
}

/// Centered popup rectangle clamped to the frame
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
