//! State management for the paper browser TUI.
//!
//! This module provides the state types for the filter controls and the
//! cursor position in the card list.

mod filter_state;

pub use filter_state::{ALL_SOURCES_LABEL, FilterState};
