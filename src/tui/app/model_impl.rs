//! `Model` trait implementation for the paper browser.
//!
//! This module contains the `bubbletea_rs::Model` implementation for
//! `PaperApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::PaperApp;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;

impl Model for PaperApp {
    fn init() -> (Self, Option<Cmd>) {
        let settings = crate::tui::get_browser_settings();
        let model = Self::loading(&settings);

        // The single retrieval runs as a command; its result arrives as a
        // LoadComplete or LoadFailed message.
        (model, Some(Self::load_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay.
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&Self::render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_search_bar());
        output.push_str(&self.render_source_bar());
        output.push('\n');

        let list_height = self.calculate_list_height();
        let list_view = self.render_card_list();

        // Pin the status bar to the last row, clipping a list taller than
        // its region.
        let mut used_rows = 0_usize;
        for row in list_view.lines().take(list_height) {
            output.push_str(row);
            output.push('\n');
            used_rows = used_rows.saturating_add(1);
        }
        for _ in used_rows..list_height {
            output.push('\n');
        }
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl PaperApp {
    /// Returns the current input context for context-aware key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        if self.search_focused {
            InputContext::Searching
        } else {
            InputContext::Browsing
        }
    }

    /// Normalises the rendered frame to the terminal dimensions.
    ///
    /// Rows are clipped one column short of the terminal width to avoid
    /// autowrap and padded with spaces so shorter rows overwrite the previous
    /// frame. Missing rows are filled with blanks.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = (self.width.max(1) as usize).saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut rows: Vec<String> = output
            .lines()
            .take(height)
            .map(|row| fit_row(row, safe_width))
            .collect();
        let blank = " ".repeat(safe_width);
        rows.resize(height, blank);

        let mut frame = rows.join("\n");
        frame.push('\n');
        frame
    }
}

fn fit_row(row: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0_usize;
    for ch in row.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        fitted.push(ch);
        used = used.saturating_add(char_width);
    }
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}
