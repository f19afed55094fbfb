//! Key event handlers for different UI modes

use mealdeck_core::Weekday;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, View};

/// Convert key events to messages based on what currently has focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.modal.is_some() {
        handle_key_modal(key)
    } else if state.selected_recipe.is_some() {
        handle_key_detail(key)
    } else if state.view == View::Search && state.search.input_focused {
        handle_key_search_input(key)
    } else {
        handle_key_normal(state, key)
    }
}

/// Handle key events in the add-to-plan day picker
fn handle_key_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseModal),
        InputKey::Char('k') | InputKey::Up | InputKey::Left | InputKey::BackTab => {
            Some(Message::ModalDayPrev)
        }
        InputKey::Char('j') | InputKey::Down | InputKey::Right | InputKey::Tab => {
            Some(Message::ModalDayNext)
        }
        InputKey::Enter => Some(Message::ConfirmModal),
        // 1..7 picks Monday..Sunday directly
        key => key
            .digit()
            .filter(|d| (1..=7).contains(d))
            .map(|d| Message::AddToPlan(Weekday::from_index(d - 1))),
    }
}

/// Handle key events on the recipe detail page
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace => Some(Message::ClearSelection),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('k') | InputKey::Up => Some(Message::DetailScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::DetailScrollDown),
        InputKey::Char('a') => Some(Message::StageUnderCursor),
        key => select_view_by_digit(key),
    }
}

/// Handle key events while typing into the search box
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Esc | InputKey::Tab => Some(Message::BlurSearch),
        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::CharCtrl('u') => Some(Message::SearchClear),
        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc if state.view == View::Search && state.search.searched => {
            Some(Message::FocusSearch)
        }
        InputKey::Char('k') | InputKey::Up => Some(Message::CursorUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::CursorDown),
        InputKey::Enter => Some(Message::OpenUnderCursor),
        InputKey::Char('a') => Some(Message::StageUnderCursor),
        InputKey::Char('r') => Some(Message::RefreshDashboard),
        InputKey::Char('/') => Some(Message::FocusSearch),
        InputKey::Tab | InputKey::Right => Some(Message::NextView),
        InputKey::BackTab | InputKey::Left => Some(Message::PreviousView),
        key => select_view_by_digit(key),
    }
}

/// `1..5` select the navigable views in tab order
fn select_view_by_digit(key: InputKey) -> Option<Message> {
    let digit = key.digit()?;
    let views = View::navigable();
    if digit == 0 || digit > views.len() {
        return None;
    }
    Some(Message::SelectView(views[digit - 1].clone()))
}
