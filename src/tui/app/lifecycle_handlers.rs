//! Lifecycle and window handlers for the paper browser.
//!
//! This module handles link opening, terminal resize events, and high-level
//! lifecycle messages such as quit and help toggling.

use bubbletea_rs::Cmd;

use super::PaperApp;
use crate::tui::messages::AppMsg;

impl PaperApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenSelected => self.handle_open_selected(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    /// Opens the selected card's link; a failure is reported in the status
    /// bar.
    fn handle_open_selected(&mut self) -> Option<Cmd> {
        let link = self.selected_paper()?.link.clone();
        match (self.link_opener)(&link) {
            Ok(()) => {
                tracing::debug!(link = %link, "opened paper link");
                self.error = None;
            }
            Err(error) => {
                tracing::warn!("failed to open paper link: {error}");
                self.error = Some(error.to_string());
            }
        }
        None
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.set_visible_list_height();
        self.adjust_scroll_to_cursor();
        None
    }
}
