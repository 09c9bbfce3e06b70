//! Layout helpers for the paper browser model.
//!
//! The card list gets every row the chrome does not use. Scrolling works in
//! whole cards, so the scroll offset is a card index.

use super::{CHROME_HEIGHT, PaperApp};

impl PaperApp {
    /// Calculates the number of rows available for the card list.
    pub(super) const fn calculate_list_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    /// Stores the current list height in the card list component.
    pub(super) fn set_visible_list_height(&mut self) {
        let list_height = self.calculate_list_height();
        self.paper_list.set_visible_height(list_height);
    }

    /// Adjusts the scroll offset so the selected card remains visible.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        let cursor = self.filter_state.cursor_position;
        let visible_cards = self.paper_list.visible_cards();

        if cursor < self.filter_state.scroll_offset {
            self.filter_state.scroll_offset = cursor;
            return;
        }

        let viewport_end = self
            .filter_state
            .scroll_offset
            .saturating_add(visible_cards);
        if cursor >= viewport_end {
            self.filter_state.scroll_offset =
                cursor.saturating_sub(visible_cards.saturating_sub(1));
        }
    }
}
