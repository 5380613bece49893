//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.model.set_should_quit(true);
            return;
        }

        // Error message blocks all other interactions
        if self.model.has_error() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.model.clear_error();
            }
            return;
        }

        if self.model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.model.set_help_popup(false);
            }
            return;
        }

        // Detail overlay
        if self.model.ui_state.detail_index.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => self.close_detail(),
                KeyCode::Char('o') | KeyCode::Char('O') => self.open_in_store(),
                _ => {}
            }
            return;
        }

        match self.model.ui_state.active_section {
            ActiveSection::Search => self.handle_search_key(key),
            ActiveSection::Results => self.handle_results_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.model.set_active_section(ActiveSection::Results),
            KeyCode::Enter => {
                if !self.model.ui_state.search_query.trim().is_empty() {
                    self.perform_search();
                }
            }
            KeyCode::Esc => self.model.clear_search(),
            KeyCode::Backspace => self.model.backspace_search(),
            KeyCode::Left => self.model.prev_category(),
            KeyCode::Right => self.model.next_category(),
            KeyCode::Char(c) => self.model.append_to_search(c),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Char('/') => self.model.set_active_section(ActiveSection::Search),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('g') | KeyCode::Char('G') => self.toggle_grid(),
            KeyCode::Char('?') => self.model.set_help_popup(true),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.model.set_should_quit(true),
            KeyCode::Esc => {
                // Abandon a search that is still loading
                if self.model.search.is_loading() {
                    self.model.search.cancel();
                    self.model.on_search_state_changed();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::transport_stub::StubTransport;
    use crate::model::{
        AppModel, ArtworkSlots, CancellableFetcher, Category, DisplayMode, QueryBuilder, SearchEngine,
        SearchState,
    };

    fn controller() -> AppController {
        let fetcher = CancellableFetcher::new(StubTransport::new());
        let (search, search_rx) =
            SearchEngine::new(fetcher.clone(), QueryBuilder::new("https://catalog.test/search", 200));
        let (artwork, artwork_rx) = ArtworkSlots::new(fetcher);
        AppController::new(AppModel::new(search, artwork), search_rx, artwork_rx)
    }

    fn press(controller: &mut AppController, code: KeyCode) {
        controller.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn typing_edits_query_and_arrows_pick_category() {
        let mut controller = controller();

        for c in "abc".chars() {
            press(&mut controller, KeyCode::Char(c));
        }
        press(&mut controller, KeyCode::Backspace);
        press(&mut controller, KeyCode::Right);
        press(&mut controller, KeyCode::Right);

        assert_eq!(controller.model().ui_state.search_query, "ab");
        assert_eq!(controller.model().ui_state.category, Category::Software);

        press(&mut controller, KeyCode::Left);
        press(&mut controller, KeyCode::Left);
        press(&mut controller, KeyCode::Left);
        assert_eq!(controller.model().ui_state.category, Category::Ebooks);
    }

    #[tokio::test]
    async fn q_is_text_in_search_bar_but_quits_in_results() {
        let mut controller = controller();

        press(&mut controller, KeyCode::Char('q'));
        assert!(!controller.model().should_quit());
        assert_eq!(controller.model().ui_state.search_query, "q");

        press(&mut controller, KeyCode::Tab);
        press(&mut controller, KeyCode::Char('g'));
        assert_eq!(controller.model().ui_state.display_mode, DisplayMode::Grid);

        press(&mut controller, KeyCode::Char('q'));
        assert!(controller.model().should_quit());
    }

    #[tokio::test]
    async fn ctrl_q_quits_anywhere() {
        let mut controller = controller();
        controller.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(controller.model().should_quit());
    }

    #[tokio::test]
    async fn escape_cancels_loading_search() {
        let mut controller = controller();

        for c in "slow".chars() {
            press(&mut controller, KeyCode::Char(c));
        }
        press(&mut controller, KeyCode::Enter);
        assert_eq!(controller.model().search_state(), &SearchState::Loading);

        press(&mut controller, KeyCode::Esc);
        assert_eq!(controller.model().search_state(), &SearchState::NotSearchedYet);
        assert!(!controller.model().search.is_loading());
    }

    #[tokio::test]
    async fn error_overlay_swallows_keys_until_dismissed() {
        let mut controller = controller();
        controller.model.set_error("boom".to_string());

        press(&mut controller, KeyCode::Char('x'));
        assert_eq!(controller.model().ui_state.search_query, "");

        press(&mut controller, KeyCode::Esc);
        assert!(!controller.model().has_error());
    }
}
