//! Search box and keyword search handlers

use mealdeck_core::Recipe;
use tracing::{debug, info, warn};

use crate::state::{AppState, View};

use super::{UpdateAction, UpdateResult};

/// Focus the search box, switching to the Search screen if needed
pub fn handle_focus(state: &mut AppState) -> UpdateResult {
    if state.view != View::Search {
        let result = super::navigation::handle_select_view(state, View::Search);
        state.search.input_focused = true;
        return result;
    }
    state.selected_recipe = None;
    state.search.input_focused = true;
    UpdateResult::none()
}

pub fn handle_blur(state: &mut AppState) -> UpdateResult {
    state.search.input_focused = false;
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.search.query.push(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.search.query.pop();
    UpdateResult::none()
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.search.query.clear();
    UpdateResult::none()
}

/// Search for the trimmed contents of the search box
///
/// A blank query never reaches the source: results are emptied and the screen
/// returns to its "not searched yet" state.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let keyword = state.search.query.trim().to_string();

    if keyword.is_empty() {
        debug!("Ignoring blank search");
        // Any search still in flight is for a query the user has cleared
        state.begin_generation();
        state.search.reset_results();
        return UpdateResult::none();
    }

    let generation = state.begin_generation();
    state.search.searched = true;
    state.search.is_loading = true;
    state.search.error = None;
    state.search.last_keyword = Some(keyword.clone());
    state.search.input_focused = false;
    state.cursor = 0;

    debug!("Searching '{}' (generation {})", keyword, generation);
    UpdateResult::action(UpdateAction::SearchRecipes {
        generation,
        keyword,
    })
}

pub fn handle_search_for(state: &mut AppState, keyword: String) -> UpdateResult {
    if state.view != View::Search {
        let switched = super::navigation::handle_select_view(state, View::Search);
        debug_assert!(
            switched.message.is_none() && switched.action.is_none(),
            "entering Search requests nothing"
        );
    }
    state.search.query = keyword;
    handle_submit(state)
}

pub fn handle_completed(
    state: &mut AppState,
    generation: u64,
    keyword: String,
    recipes: Vec<Recipe>,
) -> UpdateResult {
    if !state.is_current(generation) {
        debug!(
            "Discarding stale results for '{}' (generation {}, current {})",
            keyword, generation, state.generation
        );
        return UpdateResult::none();
    }

    info!("Search '{}' returned {} recipes", keyword, recipes.len());
    state.search.results = recipes;
    state.search.is_loading = false;
    state.search.error = None;
    state.cursor = 0;
    UpdateResult::none()
}

/// Keep the previous results and surface the error
pub fn handle_failed(
    state: &mut AppState,
    generation: u64,
    keyword: String,
    error: String,
) -> UpdateResult {
    if !state.is_current(generation) {
        debug!(
            "Discarding stale failure for '{}' (generation {}, current {})",
            keyword, generation, state.generation
        );
        return UpdateResult::none();
    }

    warn!("Search '{}' failed: {}", keyword, error);
    state.search.error = Some(error);
    state.search.is_loading = false;
    state.clamp_cursor();
    UpdateResult::none()
}
