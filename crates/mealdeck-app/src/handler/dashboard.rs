//! Dashboard refresh handlers

use mealdeck_core::Recipe;
use tracing::{debug, info, warn};

use crate::state::{AppState, View};

use super::{UpdateAction, UpdateResult};

/// Start a fresh random batch, abandoning whatever is in flight
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    state.view = View::Dashboard;
    state.selected_recipe = None;
    state.search.input_focused = false;
    state.error = None;

    let generation = state.begin_generation();
    state.is_loading = true;

    let count = state.settings.dashboard.batch_size;
    debug!("Refreshing dashboard (generation {}, {} recipes)", generation, count);

    UpdateResult::action(UpdateAction::FetchRandomBatch { generation, count })
}

pub fn handle_loaded(state: &mut AppState, generation: u64, recipes: Vec<Recipe>) -> UpdateResult {
    if !state.is_current(generation) {
        debug!(
            "Discarding stale dashboard batch (generation {}, current {})",
            generation, state.generation
        );
        return UpdateResult::none();
    }

    info!("Dashboard loaded {} recipes", recipes.len());
    state.recipes = recipes;
    state.is_loading = false;
    state.error = None;
    state.clamp_cursor();
    UpdateResult::none()
}

/// Keep the previous collection and surface the error
pub fn handle_failed(state: &mut AppState, generation: u64, error: String) -> UpdateResult {
    if !state.is_current(generation) {
        debug!(
            "Discarding stale dashboard failure (generation {}, current {})",
            generation, state.generation
        );
        return UpdateResult::none();
    }

    warn!("Dashboard refresh failed: {}", error);
    state.error = Some(error);
    state.is_loading = false;
    UpdateResult::none()
}
