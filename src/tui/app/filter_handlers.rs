//! Filter message handlers for the paper browser.
//!
//! Every change to the search field or the source selector re-runs the
//! filter against the retained collection with the live value of both
//! controls.

use bubbletea_rs::Cmd;

use super::PaperApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::FilterState;

impl PaperApp {
    /// Dispatches filter messages to their handlers.
    pub(super) fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FocusSearch => self.set_search_focus(true),
            AppMsg::BlurSearch => self.set_search_focus(false),
            AppMsg::SearchInput(character) => self.handle_search_input(*character),
            AppMsg::SearchBackspace => self.handle_search_backspace(),
            AppMsg::SetQuery(query) => self.handle_set_query(query),
            AppMsg::NextSource => self.handle_source_change(|state| state.next_source()),
            AppMsg::PreviousSource => self.handle_source_change(|state| state.previous_source()),
            AppMsg::SetSource(tag) => self.handle_source_change(|state| state.select_source(tag)),
            AppMsg::ClearFilters => self.handle_clear_filters(),
            _ => {
                debug_assert!(false, "non-filter message routed to handle_filter_msg");
                None
            }
        }
    }

    const fn set_search_focus(&mut self, focused: bool) -> Option<Cmd> {
        self.search_focused = focused;
        None
    }

    fn handle_search_input(&mut self, character: char) -> Option<Cmd> {
        if character.is_control() {
            return None;
        }
        self.filter_state.push_query_char(character);
        self.refilter();
        None
    }

    fn handle_search_backspace(&mut self) -> Option<Cmd> {
        if self.filter_state.pop_query_char() {
            self.refilter();
        }
        None
    }

    fn handle_set_query(&mut self, query: &str) -> Option<Cmd> {
        self.filter_state.set_query(query);
        self.refilter();
        None
    }

    fn handle_source_change<F>(&mut self, change: F) -> Option<Cmd>
    where
        F: FnOnce(&mut FilterState),
    {
        change(&mut self.filter_state);
        self.refilter();
        None
    }

    /// Clears both controls and leaves the search field.
    fn handle_clear_filters(&mut self) -> Option<Cmd> {
        self.filter_state.clear();
        self.search_focused = false;
        self.refilter();
        None
    }
}
