//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! paper browser. It retains the loaded collection, keeps a cache of the
//! indices matching the live filter controls, and handles the single
//! asynchronous load.
//!
//! # Module Structure
//!
//! - `filter_handlers`: Search field and source selector changes
//! - `layout`: List height and scroll calculations
//! - `lifecycle_handlers`: Link opening, help, quit and resize
//! - `load_handlers`: The startup load command and its results
//! - `model_impl`: The `bubbletea_rs::Model` implementation
//! - `navigation`: Cursor movement over the filtered cards
//! - `rendering`: Header, control bars, status bar and help overlay

use bubbletea_rs::Cmd;

use crate::papers::PaperRecord;

use super::browser::{LinkOpener, open_in_browser};
use super::components::PaperListComponent;
use super::messages::AppMsg;
use super::state::FilterState;
use super::storage::BrowserSettings;

mod filter_handlers;
mod layout;
mod lifecycle_handlers;
mod load_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Rows used by everything except the card list: header, search bar, source
/// bar, spacer and status bar.
pub(super) const CHROME_HEIGHT: usize = 5;

/// Whether the single startup load has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// The retrieval has not succeeded yet; filter input is ignored.
    #[default]
    Loading,
    /// The collection is retained and the controls are live.
    Ready,
}

/// Main application model for the paper browser TUI.
#[derive(Debug)]
pub struct PaperApp {
    /// All loaded papers in document order (never filtered in place).
    pub(crate) papers: Vec<PaperRecord>,
    /// Cached indices of papers matching the current controls.
    filtered_indices: Vec<usize>,
    /// Filter control and cursor state.
    pub(crate) filter_state: FilterState,
    /// Load state machine.
    pub(crate) phase: LoadPhase,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the search field has keyboard focus.
    pub(crate) search_focused: bool,
    /// Card list component.
    paper_list: PaperListComponent,
    /// Launches the selected card's link.
    link_opener: LinkOpener,
}

impl PaperApp {
    /// Creates a ready application showing the given papers unfiltered.
    #[must_use]
    pub fn new(papers: Vec<PaperRecord>) -> Self {
        let mut app = Self::loading(&BrowserSettings::default());
        app.apply_loaded(papers);
        app
    }

    /// Creates an empty application in the loading state.
    #[must_use]
    pub fn empty() -> Self {
        Self::loading(&BrowserSettings::default())
    }

    /// Creates an application awaiting its load, with the controls preset
    /// from `settings`.
    #[must_use]
    pub fn loading(settings: &BrowserSettings) -> Self {
        let mut app = Self {
            papers: Vec::new(),
            filtered_indices: Vec::new(),
            filter_state: FilterState::new(
                &settings.query,
                &settings.source,
                settings.source_options.clone(),
            ),
            phase: LoadPhase::Loading,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            search_focused: false,
            paper_list: PaperListComponent::new(),
            link_opener: open_in_browser,
        };
        app.set_visible_list_height();
        app
    }

    /// Replaces the function used to open links.
    #[must_use]
    pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
        self.link_opener = opener;
        self
    }

    /// Returns true once the collection has loaded.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready)
    }

    /// Returns the load phase.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns all loaded papers.
    #[must_use]
    pub fn papers(&self) -> &[PaperRecord] {
        &self.papers
    }

    /// Returns the currently filtered papers.
    #[must_use]
    pub fn filtered_papers(&self) -> Vec<&PaperRecord> {
        self.filtered_indices
            .iter()
            .filter_map(|&i| self.papers.get(i))
            .collect()
    }

    /// Returns the count of filtered papers.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.filter_state.cursor_position
    }

    /// Returns the current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.filter_state.query()
    }

    /// Returns the selected source tag, or an empty string for all sources.
    #[must_use]
    pub fn selected_source(&self) -> &str {
        self.filter_state.selected_source()
    }

    /// Returns the offered source tags.
    #[must_use]
    pub fn source_options(&self) -> &[String] {
        self.filter_state.source_options()
    }

    /// Returns a reference to the paper under the cursor, if any.
    #[must_use]
    pub fn selected_paper(&self) -> Option<&PaperRecord> {
        self.filtered_indices
            .get(self.filter_state.cursor_position)
            .and_then(|&idx| self.papers.get(idx))
    }

    /// Rebuilds the filtered indices cache from the live control values.
    ///
    /// Call this after loading papers or changing either control.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self
            .filter_state
            .paper_filter()
            .matching_indices(&self.papers);
    }

    /// Re-runs the filter and keeps the cursor on a valid, visible card.
    fn refilter(&mut self) {
        self.rebuild_filter_cache();
        self.filter_state.clamp_cursor(self.filtered_count());
        self.adjust_scroll_to_cursor();
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. Navigation and filter
    /// messages are dropped until the collection has loaded.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if !self.is_ready() && (msg.is_navigation() || msg.is_filter()) {
            return None;
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }
}
