//! Navigation-related controller methods (search, results, detail)

use crate::model::{ActiveSection, DisplayMode};
use super::{AppController, Notice};

impl AppController {
    /// Search for the text in the search bar within the selected category.
    pub fn perform_search(&mut self) {
        let query = self.model.ui_state.search_query.clone();
        let category = self.model.ui_state.category;
        tracing::debug!(query = %query, ?category, "Performing search");

        let notices = self.notices_tx.clone();
        self.model.search.perform_search(
            &query,
            category,
            Box::new(move |success| {
                if !success {
                    let _ = notices.send(Notice::SearchFailed);
                }
            }),
        );

        // Whatever was on screen belongs to the previous search now.
        self.model.on_search_state_changed();
        if self.model.search.is_loading() {
            self.model.set_active_section(ActiveSection::Results);
        }
    }

    pub fn move_up(&mut self) {
        self.model.move_selection(-1);
    }

    pub fn move_down(&mut self) {
        self.model.move_selection(1);
    }

    pub fn move_left(&mut self) {
        if self.model.ui_state.display_mode == DisplayMode::Grid {
            self.model.change_grid_page(false);
        }
    }

    pub fn move_right(&mut self) {
        if self.model.ui_state.display_mode == DisplayMode::Grid {
            self.model.change_grid_page(true);
        }
    }

    pub fn toggle_grid(&mut self) {
        self.model.toggle_display_mode();
        tracing::debug!(mode = ?self.model.ui_state.display_mode, "Display mode changed");
    }

    pub fn open_detail(&mut self) {
        self.model.open_detail();
    }

    pub fn close_detail(&mut self) {
        self.model.close_detail();
    }

    /// Open the store page of the result shown in the detail overlay.
    pub fn open_in_store(&mut self) {
        let Some(url) = self.model.detail_result().map(|result| result.store_url.clone()) else {
            return;
        };
        if url.is_empty() {
            self.model.set_error("This item has no store page.".to_string());
            return;
        }

        tracing::info!(%url, "Opening store page");
        if let Err(e) = (self.url_opener)(&url) {
            tracing::warn!(%url, error = %e, "Failed to open store page");
            self.model.set_error(format!("Could not open the store page: {}", e));
        }
    }
}
