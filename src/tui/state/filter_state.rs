//! Search, source selection and cursor state for the card list.
//!
//! This module holds the live values of both filter controls and the user's
//! position within the filtered list. Every change to either control yields
//! a [`PaperFilter`] built from the current value of both, so the two
//! criteria always combine no matter which control changed last. The cursor
//! is retained across filter changes and clamped to the valid range.

use crate::papers::PaperFilter;

/// Label shown for the "no source filter" option.
pub const ALL_SOURCES_LABEL: &str = "All sources";

/// State of the search field, source selector and cursor.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Current search text, exactly as typed.
    query: String,
    /// Source tags offered by the selector.
    source_options: Vec<String>,
    /// Index into `source_options`; `None` selects all sources.
    selected_source: Option<usize>,
    /// Current cursor position (0-indexed) within the filtered list.
    pub cursor_position: usize,
    /// Index of the first visible card.
    pub scroll_offset: usize,
}

impl FilterState {
    /// Creates a filter state with the given initial values.
    ///
    /// An initial source missing from `source_options` is appended so it can
    /// be selected.
    #[must_use]
    pub fn new(query: &str, source: &str, source_options: Vec<String>) -> Self {
        let mut state = Self {
            query: query.to_owned(),
            source_options,
            ..Self::default()
        };
        state.select_source(source);
        state
    }

    /// Returns the current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the selected source tag, or an empty string for all sources.
    #[must_use]
    pub fn selected_source(&self) -> &str {
        self.selected_source
            .and_then(|index| self.source_options.get(index))
            .map_or("", String::as_str)
    }

    /// Returns the selector label for the current selection.
    #[must_use]
    pub fn source_label(&self) -> &str {
        match self.selected_source() {
            "" => ALL_SOURCES_LABEL,
            tag => tag,
        }
    }

    /// Returns the offered source tags.
    #[must_use]
    pub fn source_options(&self) -> &[String] {
        &self.source_options
    }

    /// Builds the filter from the live value of both controls.
    #[must_use]
    pub fn paper_filter(&self) -> PaperFilter {
        PaperFilter::new(self.query.as_str(), self.selected_source())
    }

    /// Appends a character to the search text.
    pub fn push_query_char(&mut self, character: char) {
        self.query.push(character);
    }

    /// Removes the last character of the search text.
    ///
    /// Returns `false` when the text was already empty.
    pub fn pop_query_char(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
    }

    /// Selects a source tag, adding it to the options if it is new.
    ///
    /// An empty (or blank) tag selects all sources.
    pub fn select_source(&mut self, tag: &str) {
        if tag.trim().is_empty() {
            self.selected_source = None;
            return;
        }
        self.add_source_option(tag);
        self.selected_source = self.source_options.iter().position(|option| option == tag);
    }

    /// Cycles forward through "all sources" and each option.
    pub fn next_source(&mut self) {
        self.selected_source = match self.selected_source {
            None if self.source_options.is_empty() => None,
            None => Some(0),
            Some(index) if index.saturating_add(1) < self.source_options.len() => {
                Some(index.saturating_add(1))
            }
            Some(_) => None,
        };
    }

    /// Cycles backward through "all sources" and each option.
    pub fn previous_source(&mut self) {
        self.selected_source = match self.selected_source {
            None => self.source_options.len().checked_sub(1),
            Some(0) => None,
            Some(index) => Some(index.saturating_sub(1)),
        };
    }

    /// Appends source tags not yet offered, keeping first-seen order.
    pub fn merge_source_options<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) {
        for tag in tags {
            if !tag.trim().is_empty() {
                self.add_source_option(tag);
            }
        }
    }

    /// Clears the search text and source selection.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_source = None;
    }

    fn add_source_option(&mut self, tag: &str) {
        if !self.source_options.iter().any(|option| option == tag) {
            self.source_options.push(tag.to_owned());
        }
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }
}
