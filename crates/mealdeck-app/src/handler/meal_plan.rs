//! Add-to-plan modal handlers

use mealdeck_core::{Recipe, Weekday};
use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AddToPlanModal, AppState};

use super::UpdateResult;

pub fn handle_open_modal(state: &mut AppState, recipe: Recipe) -> UpdateResult {
    debug!("Staging {} for the meal plan", recipe.id);
    state.modal = Some(AddToPlanModal::new(recipe));
    UpdateResult::none()
}

/// Stage the recipe on the detail page, or the highlighted row
pub fn handle_stage_under_cursor(state: &mut AppState) -> UpdateResult {
    let recipe = state
        .selected_recipe
        .as_ref()
        .or_else(|| state.recipe_under_cursor())
        .cloned();

    match recipe {
        Some(recipe) => UpdateResult::message(Message::OpenAddToPlan(recipe)),
        None => UpdateResult::none(),
    }
}

pub fn handle_close_modal(state: &mut AppState) -> UpdateResult {
    state.modal = None;
    UpdateResult::none()
}

pub fn handle_day_prev(state: &mut AppState) -> UpdateResult {
    if let Some(modal) = state.modal.as_mut() {
        modal.prev_day();
    }
    UpdateResult::none()
}

pub fn handle_day_next(state: &mut AppState) -> UpdateResult {
    if let Some(modal) = state.modal.as_mut() {
        modal.next_day();
    }
    UpdateResult::none()
}

pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    match state.modal.as_ref() {
        Some(modal) => UpdateResult::message(Message::AddToPlan(modal.selected_day())),
        None => UpdateResult::none(),
    }
}

/// Append the staged recipe to `day` and close the modal
///
/// Without a staged recipe this is a no-op.
pub fn handle_add_to_plan(state: &mut AppState, day: Weekday) -> UpdateResult {
    match state.modal.take() {
        Some(modal) => {
            info!("Added {} to {}", modal.recipe.title, day);
            state.meal_plan.add(day, modal.recipe);
        }
        None => debug!("AddToPlan({}) with nothing staged", day),
    }
    UpdateResult::none()
}
