//! Main application model with state management

use super::artwork::{ArtworkSlots, SlotKey};
use super::content::SearchResult;
use super::search_engine::{SearchEngine, SearchState};
use super::types::{ActiveSection, DisplayMode, UiState};

/// Rows of the result list that keep an artwork slot bound
pub const LIST_WINDOW: usize = 20;
pub const GRID_COLUMNS: usize = 4;
pub const GRID_ROWS: usize = 3;
pub const GRID_PAGE_SIZE: usize = GRID_COLUMNS * GRID_ROWS;

/// Main application model containing all state.
///
/// Owned by the controller and only touched from the UI loop.
pub struct AppModel {
    pub search: SearchEngine,
    pub artwork: ArtworkSlots,
    pub ui_state: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(search: SearchEngine, artwork: ArtworkSlots) -> Self {
        Self {
            search,
            artwork,
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    pub fn search_state(&self) -> &SearchState {
        self.search.state()
    }

    pub fn results(&self) -> &[SearchResult] {
        self.search.state().results()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    // ========================================================================
    // Search bar
    // ========================================================================

    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.ui_state.active_section = section;
    }

    pub fn append_to_search(&mut self, c: char) {
        self.ui_state.search_query.push(c);
    }

    pub fn backspace_search(&mut self) {
        self.ui_state.search_query.pop();
    }

    pub fn clear_search(&mut self) {
        self.ui_state.search_query.clear();
    }

    pub fn next_category(&mut self) {
        self.ui_state.category = self.ui_state.category.next();
    }

    pub fn prev_category(&mut self) {
        self.ui_state.category = self.ui_state.category.prev();
    }

    // ========================================================================
    // Results navigation
    // ========================================================================

    /// Reset navigation after the search state changed and rebind artwork.
    pub fn on_search_state_changed(&mut self) {
        self.ui_state.selected = 0;
        self.ui_state.detail_index = None;
        self.artwork.release_all();
        self.bind_visible_artwork();
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self.results().len();
        if count == 0 {
            return;
        }
        let target = self.ui_state.selected.saturating_add_signed(delta);
        self.ui_state.selected = target.min(count - 1);
        self.bind_visible_artwork();
    }

    pub fn toggle_display_mode(&mut self) {
        self.ui_state.display_mode = match self.ui_state.display_mode {
            DisplayMode::List => DisplayMode::Grid,
            DisplayMode::Grid => DisplayMode::List,
        };
        self.bind_visible_artwork();
    }

    pub fn grid_page(&self) -> usize {
        self.ui_state.selected / GRID_PAGE_SIZE
    }

    pub fn grid_page_count(&self) -> usize {
        self.results().len().div_ceil(GRID_PAGE_SIZE)
    }

    /// Jump to the first tile of the next (or previous) grid page.
    pub fn change_grid_page(&mut self, forward: bool) {
        let pages = self.grid_page_count();
        if pages == 0 {
            return;
        }
        let page = self.grid_page();
        let target = if forward {
            (page + 1).min(pages - 1)
        } else {
            page.saturating_sub(1)
        };
        if target != page {
            self.ui_state.selected = target * GRID_PAGE_SIZE;
            self.bind_visible_artwork();
        }
    }

    /// First result index shown in the list window.
    pub fn list_window_start(&self) -> usize {
        self.ui_state.selected / LIST_WINDOW * LIST_WINDOW
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results().get(self.ui_state.selected)
    }

    pub fn detail_result(&self) -> Option<&SearchResult> {
        self.ui_state.detail_index.and_then(|index| self.results().get(index))
    }

    pub fn open_detail(&mut self) {
        if self.selected_result().is_some() {
            self.ui_state.detail_index = Some(self.ui_state.selected);
            self.bind_visible_artwork();
        }
    }

    pub fn close_detail(&mut self) {
        self.ui_state.detail_index = None;
        self.artwork.release(SlotKey::Detail);
    }

    /// Bind every on-screen slot to the artwork of the result it now shows
    /// and release slots that show nothing.
    pub fn bind_visible_artwork(&mut self) {
        let mode = self.ui_state.display_mode;
        let (start, size) = match mode {
            DisplayMode::List => (self.list_window_start(), LIST_WINDOW),
            DisplayMode::Grid => (self.grid_page() * GRID_PAGE_SIZE, GRID_PAGE_SIZE),
        };

        self.artwork.retain(|slot| match slot {
            SlotKey::Row(_) => mode == DisplayMode::List,
            SlotKey::Tile(_) => mode == DisplayMode::Grid,
            SlotKey::Detail => true,
        });

        let results = self.search.state().results();
        for position in 0..size {
            let slot = match mode {
                DisplayMode::List => SlotKey::Row(position),
                DisplayMode::Grid => SlotKey::Tile(position),
            };
            match results.get(start + position) {
                Some(result) => self.artwork.bind(slot, &result.thumbnail_url),
                None => self.artwork.release(slot),
            }
        }

        match self.ui_state.detail_index.and_then(|index| results.get(index)) {
            Some(result) => self.artwork.bind(SlotKey::Detail, &result.full_image_url),
            None => self.artwork.release(SlotKey::Detail),
        }
    }

    /// Slot currently showing the artwork of result `index`, if any.
    pub fn slot_for(&self, index: usize) -> Option<SlotKey> {
        match self.ui_state.display_mode {
            DisplayMode::List => {
                let start = self.list_window_start();
                (start..start + LIST_WINDOW)
                    .contains(&index)
                    .then(|| SlotKey::Row(index - start))
            }
            DisplayMode::Grid => {
                let start = self.grid_page() * GRID_PAGE_SIZE;
                (start..start + GRID_PAGE_SIZE)
                    .contains(&index)
                    .then(|| SlotKey::Tile(index - start))
            }
        }
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub fn set_error(&mut self, message: String) {
        self.ui_state.error_message = Some(message);
    }

    pub fn has_error(&self) -> bool {
        self.ui_state.error_message.is_some()
    }

    pub fn clear_error(&mut self) {
        self.ui_state.error_message = None;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }

    pub fn set_help_popup(&mut self, open: bool) {
        self.ui_state.show_help_popup = open;
    }
}
