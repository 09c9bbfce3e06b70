//! UI components for the paper browser TUI.
//!
//! Components render from a borrowed view context and hold only layout
//! state, so drawing is a pure function of the application state.

mod paper_list;
mod text_truncate;

pub use paper_list::{CARD_HEIGHT, PaperListComponent, PaperListViewContext, format_card};
