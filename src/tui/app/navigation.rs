//! Navigation handlers and cursor management.
//!
//! The cursor indexes the filtered list. After each move the scroll offset
//! is adjusted so the selected card stays in the visible window.

use bubbletea_rs::Cmd;

use super::PaperApp;

impl PaperApp {
    fn set_cursor(&mut self, position: usize) {
        self.filter_state.cursor_position = position;
        self.adjust_scroll_to_cursor();
    }

    fn move_cursor_up(&mut self, step: usize) {
        let new_pos = self.filter_state.cursor_position.saturating_sub(step);
        self.set_cursor(new_pos);
    }

    fn move_cursor_down(&mut self, step: usize) {
        let max_index = self.filtered_count().saturating_sub(1);
        let new_pos = self
            .filter_state
            .cursor_position
            .saturating_add(step)
            .min(max_index);
        self.set_cursor(new_pos);
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.move_cursor_up(1);
        None
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.move_cursor_down(1);
        None
    }

    /// Moves up by one screen of cards.
    pub(super) fn handle_page_up(&mut self) -> Option<Cmd> {
        let page_size = self.paper_list.visible_cards();
        self.move_cursor_up(page_size);
        None
    }

    /// Moves down by one screen of cards.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let page_size = self.paper_list.visible_cards();
        self.move_cursor_down(page_size);
        None
    }

    pub(super) fn handle_home(&mut self) -> Option<Cmd> {
        self.filter_state.scroll_offset = 0;
        self.set_cursor(0);
        None
    }

    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        let max_index = self.filtered_count().saturating_sub(1);
        self.set_cursor(max_index);
        None
    }
}
