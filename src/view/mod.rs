//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, artwork markers, popups)
//! - `layout`: Search bar and category selector
//! - `content`: Result list and grid rendering
//! - `status`: Bottom status line
//! - `overlays`: Modal overlays (detail, error, help)

mod utils;
mod layout;
mod content;
mod status;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::AppModel;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, model: &AppModel) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + category
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], &model.ui_state);

        content::render_main_content(frame, chunks[1], model);

        status::render_status_line(frame, chunks[2], model);

        if let Some(result) = model.detail_result() {
            overlays::render_detail(frame, result, model);
        }

        if model.ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }

        // Error notification goes on top of everything else
        if model.ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, &model.ui_state);
        }
    }
}
