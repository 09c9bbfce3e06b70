//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::error::BrowseError;
use crate::papers::PaperRecord;

/// Messages for the paper browser TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one card.
    CursorUp,
    /// Move cursor down one card.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first card.
    Home,
    /// Move cursor to last card.
    End,

    // Filter controls
    /// Give keyboard focus to the search field.
    FocusSearch,
    /// Return keyboard focus to the card list.
    BlurSearch,
    /// Append a character to the search text.
    SearchInput(char),
    /// Delete the last character of the search text.
    SearchBackspace,
    /// Replace the search text.
    SetQuery(String),
    /// Select the next source option.
    NextSource,
    /// Select the previous source option.
    PreviousSource,
    /// Select a source tag directly (empty for all sources).
    SetSource(String),
    /// Clear both the search text and the source selection.
    ClearFilters,

    // Data loading
    /// The startup load succeeded.
    LoadComplete {
        /// Loaded records in document order.
        papers: Vec<PaperRecord>,
        /// Time taken by the retrieval, in milliseconds.
        latency_ms: u64,
    },
    /// The startup load failed.
    LoadFailed(String),

    // Application lifecycle
    /// Open the selected card's link in the system browser.
    OpenSelected,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a load failure message from a [`BrowseError`].
    #[must_use]
    pub fn from_error(error: &BrowseError) -> Self {
        Self::LoadFailed(error.to_string())
    }

    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for messages that change the search field or source
    /// selector.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::FocusSearch
                | Self::BlurSearch
                | Self::SearchInput(_)
                | Self::SearchBackspace
                | Self::SetQuery(_)
                | Self::NextSource
                | Self::PreviousSource
                | Self::SetSource(_)
                | Self::ClearFilters
        )
    }

    /// Returns true for load result messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::LoadComplete { .. } | Self::LoadFailed(_))
    }
}
