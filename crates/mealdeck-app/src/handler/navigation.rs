//! View switching, recipe selection, and cursor movement

use mealdeck_core::Recipe;
use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, View};

use super::UpdateResult;

/// Switch the active screen
///
/// Always leaves the detail page. Re-selecting the current screen does nothing
/// else. Moving to another screen abandons in-flight requests; arriving at the
/// Dashboard from elsewhere fetches a fresh batch.
pub fn handle_select_view(state: &mut AppState, view: View) -> UpdateResult {
    state.selected_recipe = None;
    state.detail_scroll = 0;

    if state.view == view {
        return UpdateResult::none();
    }

    debug!("View {} -> {}", state.view.tag(), view.tag());

    state.begin_generation();

    let previous = std::mem::replace(&mut state.view, view);
    state.cursor = 0;
    state.search.input_focused = state.view == View::Search;

    if state.view == View::Dashboard && previous != View::Dashboard {
        UpdateResult::message(Message::RefreshDashboard)
    } else {
        UpdateResult::none()
    }
}

/// Step through the navigable screens; off-bar screens restart at the first
pub fn handle_cycle_view(state: &mut AppState, step: isize) -> UpdateResult {
    let views = View::navigable();
    let len = views.len() as isize;
    let next = match state.view.nav_index() {
        Some(index) => (index as isize + step).rem_euclid(len) as usize,
        None => 0,
    };
    handle_select_view(state, views[next].clone())
}

pub fn handle_select_recipe(state: &mut AppState, recipe: Recipe) -> UpdateResult {
    debug!("Selected recipe {}", recipe.id);
    state.selected_recipe = Some(recipe);
    state.detail_scroll = 0;
    state.search.input_focused = false;
    UpdateResult::none()
}

pub fn handle_clear_selection(state: &mut AppState) -> UpdateResult {
    state.selected_recipe = None;
    state.detail_scroll = 0;
    UpdateResult::none()
}

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.cursor = state.cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    let len = state.visible_recipes().len();
    if state.cursor + 1 < len {
        state.cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_open_under_cursor(state: &mut AppState) -> UpdateResult {
    match state.recipe_under_cursor() {
        Some(recipe) => UpdateResult::message(Message::SelectRecipe(recipe.clone())),
        None => UpdateResult::none(),
    }
}

pub fn handle_detail_scroll(state: &mut AppState, delta: i32) -> UpdateResult {
    if state.selected_recipe.is_some() {
        state.detail_scroll = if delta < 0 {
            state.detail_scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            state.detail_scroll.saturating_add(delta as u16)
        };
    }
    UpdateResult::none()
}
