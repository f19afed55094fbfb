//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{dashboard, keys::handle_key, meal_plan, navigation, search, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectView(view) => navigation::handle_select_view(state, view),
        Message::NextView => navigation::handle_cycle_view(state, 1),
        Message::PreviousView => navigation::handle_cycle_view(state, -1),
        Message::SelectRecipe(recipe) => navigation::handle_select_recipe(state, recipe),
        Message::ClearSelection => navigation::handle_clear_selection(state),
        Message::CursorUp => navigation::handle_cursor_up(state),
        Message::CursorDown => navigation::handle_cursor_down(state),
        Message::OpenUnderCursor => navigation::handle_open_under_cursor(state),
        Message::DetailScrollUp => navigation::handle_detail_scroll(state, -1),
        Message::DetailScrollDown => navigation::handle_detail_scroll(state, 1),

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::RefreshDashboard => dashboard::handle_refresh(state),
        Message::DashboardLoaded {
            generation,
            recipes,
        } => dashboard::handle_loaded(state, generation, recipes),
        Message::DashboardFailed { generation, error } => {
            dashboard::handle_failed(state, generation, error)
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::FocusSearch => search::handle_focus(state),
        Message::BlurSearch => search::handle_blur(state),
        Message::SearchInput(c) => search::handle_input(state, c),
        Message::SearchBackspace => search::handle_backspace(state),
        Message::SearchClear => search::handle_clear(state),
        Message::SubmitSearch => search::handle_submit(state),
        Message::SearchFor(keyword) => search::handle_search_for(state, keyword),
        Message::SearchCompleted {
            generation,
            keyword,
            recipes,
        } => search::handle_completed(state, generation, keyword, recipes),
        Message::SearchFailed {
            generation,
            keyword,
            error,
        } => search::handle_failed(state, generation, keyword, error),

        // ─────────────────────────────────────────────────────────
        // Meal Plan
        // ─────────────────────────────────────────────────────────
        Message::OpenAddToPlan(recipe) => meal_plan::handle_open_modal(state, recipe),
        Message::StageUnderCursor => meal_plan::handle_stage_under_cursor(state),
        Message::CloseModal => meal_plan::handle_close_modal(state),
        Message::ModalDayPrev => meal_plan::handle_day_prev(state),
        Message::ModalDayNext => meal_plan::handle_day_next(state),
        Message::ConfirmModal => meal_plan::handle_confirm(state),
        Message::AddToPlan(day) => meal_plan::handle_add_to_plan(state, day),
    }
}
