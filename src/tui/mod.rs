//! Terminal User Interface for browsing and filtering papers.
//!
//! This module provides an interactive TUI that shows the paper collection as
//! cards and narrows it with a search field and a source selector, using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::PaperApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Filter control and cursor state
//! - [`components`]: Card list rendering
//! - [`input`]: Key-to-message mapping for input handling
//! - [`browser`]: Opening paper links in the system browser
//!
//! # Startup Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the gateway and initial control values are stored at module
//! level. Call [`set_paper_gateway`] (and optionally
//! [`set_browser_settings`]) before starting the program; `PaperApp::init()`
//! then issues the single load as a command.

pub mod app;
pub mod browser;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::{LoadPhase, PaperApp};
pub(crate) use storage::{fetch_papers, get_browser_settings};
pub use storage::{
    BrowserSettings, load_and_record, load_with, set_browser_settings, set_paper_gateway,
    set_telemetry_sink,
};
