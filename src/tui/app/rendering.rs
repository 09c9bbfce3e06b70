//! Rendering logic for the paper browser.
//!
//! These are pure query methods that read state without modification, so
//! rendering the same state twice produces identical frames.

use super::PaperApp;
use crate::tui::components::PaperListViewContext;

const HELP_TEXT: &str = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move to next card
  k, Up      Move to previous card
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first card
  End, G     Go to last card

Filtering:
  /          Edit search text
  Enter, Esc Finish editing search text
  Ctrl+U     Clear search text
  s, Tab     Next source
  S          Previous source
  Esc        Clear search and source

Other:
  Enter, o   Open the selected paper's link
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";

impl PaperApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Paperdeck - Papers";
        let loading_indicator = if self.is_ready() { "" } else { " [Loading...]" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the search field; a trailing `_` marks keyboard focus.
    pub(super) fn render_search_bar(&self) -> String {
        let caret = if self.search_focused { "_" } else { "" };
        format!("Search: {}{caret}\n", self.query())
    }

    /// Renders the source selector with the match count.
    pub(super) fn render_source_bar(&self) -> String {
        let label = self.filter_state.source_label();
        let count = self.filtered_count();
        let total = self.papers.len();
        format!("Source: {label} ({count}/{total})\n")
    }

    /// Renders the visible cards.
    pub(super) fn render_card_list(&self) -> String {
        if !self.is_ready() {
            return String::new();
        }
        let ctx = PaperListViewContext {
            papers: &self.papers,
            filtered_indices: &self.filtered_indices,
            cursor_position: self.filter_state.cursor_position,
            scroll_offset: self.filter_state.scroll_offset,
            visible_height: self.calculate_list_height(),
            max_width: (self.width as usize).saturating_sub(1).max(1),
        };
        self.paper_list.view(&ctx)
    }

    /// Renders the status bar with the error or help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        let hints = if !self.is_ready() {
            "Loading papers...  ?:help  q:quit"
        } else if self.search_focused {
            "Type to search  Backspace:delete  Enter/Esc:done"
        } else if self.width <= 80 {
            "q:quit  ?:help  j/k:move  /:search  s:source  o:open"
        } else {
            "j/k:move  /:search  s/S:source  Esc:clear  Enter/o:open  ?:help  q:quit"
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        HELP_TEXT.to_owned()
    }
}
