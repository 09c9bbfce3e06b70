//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on whether the
//! search field has keyboard focus: while it does, printable keys edit the
//! query instead of triggering commands.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Which control currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    /// Keys drive the card list.
    #[default]
    Browsing,
    /// Keys edit the search field.
    Searching,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key);
    }

    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::Searching => map_search_key(key.key),
    }
}

/// Maps a key event in browsing context.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    map_key_to_message_with_context(key, InputContext::Browsing)
}

const fn map_control_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('c') => Some(AppMsg::Quit),
        KeyCode::Char('u') => Some(AppMsg::SetQuery(String::new())),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browsing_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('/') => Some(AppMsg::FocusSearch),
        KeyCode::Char('s') | KeyCode::Tab => Some(AppMsg::NextSource),
        KeyCode::Char('S') | KeyCode::BackTab => Some(AppMsg::PreviousSource),
        KeyCode::Esc => Some(AppMsg::ClearFilters),
        KeyCode::Enter | KeyCode::Char('o') => Some(AppMsg::OpenSelected),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_search_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char(character) => Some(AppMsg::SearchInput(character)),
        KeyCode::Backspace => Some(AppMsg::SearchBackspace),
        KeyCode::Enter | KeyCode::Esc => Some(AppMsg::BlurSearch),
        KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Tab => Some(AppMsg::NextSource),
        KeyCode::BackTab => Some(AppMsg::PreviousSource),
        _ => None,
    }
}
