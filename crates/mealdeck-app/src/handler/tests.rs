//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::state::{AppState, View};
use mealdeck_core::{normalize, Recipe, Weekday};
use mealdeck_source::test_utils::sample_meal;

fn recipe(id: &str, title: &str) -> Recipe {
    normalize(&sample_meal(id, title)).unwrap()
}

fn batch(prefix: &str, n: usize) -> Vec<Recipe> {
    (1..=n)
        .map(|i| recipe(&format!("{prefix}-{i}"), &format!("{prefix} {i}")))
        .collect()
}

/// Run a message and every follow-up, collecting the actions requested
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

/// State with a loaded dashboard of `n` recipes
fn loaded_state(n: usize) -> AppState {
    let mut state = AppState::new();
    run(&mut state, Message::RefreshDashboard);
    let generation = state.generation;
    run(
        &mut state,
        Message::DashboardLoaded {
            generation,
            recipes: batch("dash", n),
        },
    );
    state
}

// ─────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────

#[test]
fn test_refresh_dashboard_requests_batch() {
    let mut state = AppState::new();
    state.error = Some("old".into());

    let actions = run(&mut state, Message::RefreshDashboard);

    assert!(state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(
        actions,
        vec![UpdateAction::FetchRandomBatch {
            generation: state.generation,
            count: 8,
        }]
    );
}

#[test]
fn test_refresh_forces_dashboard_and_clears_selection() {
    let mut state = loaded_state(2);
    state.view = View::MealPlan;
    state.selected_recipe = Some(recipe("1", "One"));

    run(&mut state, Message::RefreshDashboard);

    assert_eq!(state.view, View::Dashboard);
    assert!(state.selected_recipe.is_none());
}

#[test]
fn test_refresh_uses_configured_batch_size() {
    let mut state = AppState::new();
    state.settings.dashboard.batch_size = 3;

    let actions = run(&mut state, Message::RefreshDashboard);

    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchRandomBatch { count: 3, .. }]
    ));
}

#[test]
fn test_dashboard_loaded_replaces_recipes() {
    let state = loaded_state(8);
    assert_eq!(state.recipes.len(), 8);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(state.recipes[0].id.as_str(), "dash-1");
}

#[test]
fn test_dashboard_failure_keeps_previous_recipes() {
    let mut state = loaded_state(8);
    let before: Vec<_> = state.recipes.iter().map(|r| r.id.clone()).collect();

    run(&mut state, Message::RefreshDashboard);
    let generation = state.generation;
    // The 3rd of 8 requests failed, so the whole batch did
    run(
        &mut state,
        Message::DashboardFailed {
            generation,
            error: "Failed to fetch recipes. Please try again.".into(),
        },
    );

    assert_eq!(
        state.error.as_deref(),
        Some("Failed to fetch recipes. Please try again.")
    );
    assert!(!state.is_loading);
    let after: Vec<_> = state.recipes.iter().map(|r| r.id.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_stale_dashboard_batch_is_discarded() {
    let mut state = AppState::new();
    run(&mut state, Message::RefreshDashboard);
    let stale = state.generation;
    run(&mut state, Message::RefreshDashboard);

    run(
        &mut state,
        Message::DashboardLoaded {
            generation: stale,
            recipes: batch("old", 8),
        },
    );

    assert!(state.recipes.is_empty());
    assert!(state.is_loading, "newer request is still in flight");
}

#[test]
fn test_stale_dashboard_failure_is_discarded() {
    let mut state = loaded_state(2);
    let stale = state.generation;
    run(&mut state, Message::RefreshDashboard);

    run(
        &mut state,
        Message::DashboardFailed {
            generation: stale,
            error: "boom".into(),
        },
    );

    assert!(state.error.is_none());
    assert!(state.is_loading);
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_select_dashboard_from_dashboard_does_not_refetch() {
    let mut state = loaded_state(3);
    let generation = state.generation;

    let actions = run(&mut state, Message::SelectView(View::Dashboard));

    assert!(actions.is_empty());
    assert_eq!(state.generation, generation);
    assert_eq!(state.recipes.len(), 3);
}

#[test]
fn test_select_dashboard_from_elsewhere_refetches() {
    let mut state = loaded_state(3);
    run(&mut state, Message::SelectView(View::MealPlan));

    let actions = run(&mut state, Message::SelectView(View::Dashboard));

    assert_eq!(state.view, View::Dashboard);
    assert!(state.is_loading);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchRandomBatch { .. }]
    ));
}

#[test]
fn test_select_view_clears_selection() {
    let mut state = loaded_state(3);
    state.selected_recipe = Some(recipe("1", "One"));

    run(&mut state, Message::SelectView(View::Dashboard));
    assert!(state.selected_recipe.is_none());

    state.selected_recipe = Some(recipe("1", "One"));
    run(&mut state, Message::SelectView(View::Chatbot));
    assert!(state.selected_recipe.is_none());
    assert_eq!(state.view, View::Chatbot);
}

#[test]
fn test_leaving_view_abandons_in_flight_fetch() {
    let mut state = AppState::new();
    run(&mut state, Message::RefreshDashboard);
    let in_flight = state.generation;

    run(&mut state, Message::SelectView(View::MealPlan));
    assert!(!state.is_loading);

    run(
        &mut state,
        Message::DashboardLoaded {
            generation: in_flight,
            recipes: batch("late", 8),
        },
    );
    assert!(state.recipes.is_empty());
}

#[test]
fn test_unknown_view_is_placeholder() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::SelectView(View::from_tag("settings")));

    assert!(actions.is_empty());
    assert!(state.view.is_placeholder());
}

#[test]
fn test_cycle_view_wraps() {
    let mut state = AppState::new();
    run(&mut state, Message::PreviousView);
    assert_eq!(state.view, View::MyRecipes);

    run(&mut state, Message::NextView);
    assert_eq!(state.view, View::Dashboard);
}

#[test]
fn test_select_and_clear_recipe() {
    let mut state = loaded_state(3);
    let target = state.recipes[1].clone();

    run(&mut state, Message::SelectRecipe(target.clone()));
    assert_eq!(state.selected_recipe.as_ref().map(|r| &r.id), Some(&target.id));

    run(&mut state, Message::ClearSelection);
    assert!(state.selected_recipe.is_none());
    assert_eq!(state.view, View::Dashboard);
}

#[test]
fn test_cursor_moves_within_bounds() {
    let mut state = loaded_state(3);

    run(&mut state, Message::CursorUp);
    assert_eq!(state.cursor, 0);

    for _ in 0..5 {
        run(&mut state, Message::CursorDown);
    }
    assert_eq!(state.cursor, 2);

    run(&mut state, Message::OpenUnderCursor);
    assert_eq!(
        state.selected_recipe.as_ref().map(|r| r.id.as_str()),
        Some("dash-3")
    );
}

#[test]
fn test_open_under_cursor_on_empty_list() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenUnderCursor);
    assert!(state.selected_recipe.is_none());
}

#[test]
fn test_detail_scroll_only_on_detail_page() {
    let mut state = loaded_state(1);
    run(&mut state, Message::DetailScrollDown);
    assert_eq!(state.detail_scroll, 0);

    run(&mut state, Message::OpenUnderCursor);
    run(&mut state, Message::DetailScrollDown);
    run(&mut state, Message::DetailScrollDown);
    run(&mut state, Message::DetailScrollUp);
    assert_eq!(state.detail_scroll, 1);
}

// ─────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────

fn type_query(state: &mut AppState, text: &str) {
    for c in text.chars() {
        run(state, Message::SearchInput(c));
    }
}

#[test]
fn test_blank_search_issues_no_request() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectView(View::Search));
    type_query(&mut state, "   ");

    let actions = run(&mut state, Message::SubmitSearch);

    assert!(actions.is_empty());
    assert!(state.search.results.is_empty());
    assert!(!state.search.searched);
    assert!(state.search.error.is_none());
}

#[test]
fn test_blank_search_clears_previous_results() {
    let mut state = AppState::new();
    run(&mut state, Message::SearchFor("soup".into()));
    let generation = state.generation;
    run(
        &mut state,
        Message::SearchCompleted {
            generation,
            keyword: "soup".into(),
            recipes: batch("soup", 2),
        },
    );

    run(&mut state, Message::SearchFor(String::new()));

    assert!(state.search.results.is_empty());
    assert!(!state.search.searched);
}

#[test]
fn test_submit_search_requests_trimmed_keyword() {
    let mut state = AppState::new();
    run(&mut state, Message::SelectView(View::Search));
    type_query(&mut state, "  curry ");

    let actions = run(&mut state, Message::SubmitSearch);

    assert!(state.search.searched);
    assert!(state.search.is_loading);
    assert!(state.search.error.is_none());
    assert_eq!(
        actions,
        vec![UpdateAction::SearchRecipes {
            generation: state.generation,
            keyword: "curry".into(),
        }]
    );
}

#[test]
fn test_search_without_matches() {
    let mut state = AppState::new();
    run(&mut state, Message::SearchFor("zzznomatch".into()));
    let generation = state.generation;

    run(
        &mut state,
        Message::SearchCompleted {
            generation,
            keyword: "zzznomatch".into(),
            recipes: vec![],
        },
    );

    assert!(state.search.results.is_empty());
    assert!(state.search.searched);
    assert!(state.search.error.is_none());
    assert!(!state.search.is_loading);
    assert!(state.search.is_empty_result());
}

#[test]
fn test_refresh_during_search_returns_search_to_prompt() {
    let mut state = loaded_state(3);
    run(&mut state, Message::SelectView(View::Search));
    type_query(&mut state, "soup");
    run(&mut state, Message::SubmitSearch);
    let abandoned = state.generation;

    run(&mut state, Message::Key(InputKey::Char('r')));
    assert_eq!(state.view, View::Dashboard);
    assert!(!state.search.is_loading);
    assert!(!state.search.searched);

    // The abandoned search answers late and is dropped
    run(
        &mut state,
        Message::SearchCompleted {
            generation: abandoned,
            keyword: "soup".into(),
            recipes: vec![],
        },
    );
    run(&mut state, Message::SelectView(View::Search));

    assert!(!state.search.searched);
    assert!(!state.search.is_empty_result());
    assert_eq!(state.recipes.len(), 3);
}

#[test]
fn test_search_failure_keeps_results() {
    let mut state = AppState::new();
    run(&mut state, Message::SearchFor("soup".into()));
    let generation = state.generation;
    run(
        &mut state,
        Message::SearchCompleted {
            generation,
            keyword: "soup".into(),
            recipes: batch("soup", 2),
        },
    );

    run(&mut state, Message::SearchFor("stew".into()));
    let generation = state.generation;
    run(
        &mut state,
        Message::SearchFailed {
            generation,
            keyword: "stew".into(),
            error: "Failed to fetch recipes. Please try again.".into(),
        },
    );

    assert_eq!(state.search.results.len(), 2);
    assert!(state.search.error.is_some());
    assert!(!state.search.is_loading);
}

#[test]
fn test_stale_search_results_are_discarded() {
    let mut state = AppState::new();
    run(&mut state, Message::SearchFor("soup".into()));
    let stale = state.generation;
    run(&mut state, Message::SearchFor("stew".into()));

    run(
        &mut state,
        Message::SearchCompleted {
            generation: stale,
            keyword: "soup".into(),
            recipes: batch("soup", 3),
        },
    );

    assert!(state.search.results.is_empty());
    assert!(state.search.is_loading);
    assert_eq!(state.search.last_keyword.as_deref(), Some("stew"));
}

#[test]
fn test_search_for_switches_to_search_view() {
    let mut state = loaded_state(2);
    let actions = run(&mut state, Message::SearchFor("soup".into()));

    assert_eq!(state.view, View::Search);
    assert_eq!(state.search.query, "soup");
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SearchRecipes { .. }]
    ));
}

#[test]
fn test_search_for_from_meal_plan_only_searches() {
    let mut state = loaded_state(2);
    run(&mut state, Message::SelectView(View::MealPlan));

    let actions = run(&mut state, Message::SearchFor("stew".into()));

    assert_eq!(state.view, View::Search);
    assert!(!state.is_loading);
    assert_eq!(
        actions,
        vec![UpdateAction::SearchRecipes {
            generation: state.generation,
            keyword: "stew".into(),
        }]
    );
}

#[test]
fn test_search_box_editing() {
    let mut state = AppState::new();
    type_query(&mut state, "pie");
    run(&mut state, Message::SearchBackspace);
    assert_eq!(state.search.query, "pi");

    run(&mut state, Message::SearchClear);
    assert!(state.search.query.is_empty());
}

#[test]
fn test_focus_search_from_dashboard() {
    let mut state = loaded_state(2);
    run(&mut state, Message::FocusSearch);
    assert_eq!(state.view, View::Search);
    assert!(state.search.input_focused);

    run(&mut state, Message::BlurSearch);
    assert!(!state.search.input_focused);
}

// ─────────────────────────────────────────────────────────
// Meal Plan
// ─────────────────────────────────────────────────────────

#[test]
fn test_add_to_plan_twice_appends_in_order() {
    let mut state = AppState::new();
    let first = recipe("1", "First");
    let second = recipe("2", "Second");

    run(&mut state, Message::OpenAddToPlan(first.clone()));
    run(&mut state, Message::AddToPlan(Weekday::Monday));
    run(&mut state, Message::OpenAddToPlan(second.clone()));
    run(&mut state, Message::AddToPlan(Weekday::Monday));

    let monday: Vec<_> = state
        .meal_plan
        .day(Weekday::Monday)
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(monday, vec![first.id, second.id]);
    for day in Weekday::ALL.iter().skip(1) {
        assert!(state.meal_plan.day(*day).is_empty());
    }
    assert!(state.modal.is_none());
}

#[test]
fn test_add_to_plan_without_staged_recipe_is_noop() {
    let mut state = AppState::new();
    run(&mut state, Message::AddToPlan(Weekday::Friday));
    assert!(state.meal_plan.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn test_close_modal_drops_staged_recipe() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenAddToPlan(recipe("1", "One")));
    run(&mut state, Message::CloseModal);

    assert!(state.modal.is_none());
    run(&mut state, Message::AddToPlan(Weekday::Monday));
    assert!(state.meal_plan.is_empty());
}

#[test]
fn test_confirm_modal_uses_day_cursor() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenAddToPlan(recipe("1", "One")));
    run(&mut state, Message::ModalDayNext);
    run(&mut state, Message::ModalDayNext);
    run(&mut state, Message::ConfirmModal);

    assert_eq!(state.meal_plan.day(Weekday::Wednesday).len(), 1);
    assert!(state.modal.is_none());
}

#[test]
fn test_stage_under_cursor_prefers_detail_page() {
    let mut state = loaded_state(3);
    let shown = state.recipes[2].clone();
    run(&mut state, Message::SelectRecipe(shown.clone()));

    run(&mut state, Message::StageUnderCursor);

    assert_eq!(
        state.modal.as_ref().map(|m| m.recipe.id.clone()),
        Some(shown.id)
    );
}

#[test]
fn test_stage_under_cursor_on_empty_list() {
    let mut state = AppState::new();
    run(&mut state, Message::StageUnderCursor);
    assert!(state.modal.is_none());
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_c_quits_everywhere() {
    let mut state = AppState::new();
    state.modal = Some(crate::state::AddToPlanModal::new(recipe("1", "One")));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_quits_in_normal_mode() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

#[test]
fn test_digit_keys_select_views() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::SelectView(View::MealPlan))
    ));
    assert!(handle_key(&state, InputKey::Char('9')).is_none());
}

#[test]
fn test_typing_in_search_box() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Char('/')));
    for c in "q1j".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }

    assert_eq!(state.search.query, "q1j");
    assert!(!state.should_quit());
    assert_eq!(state.view, View::Search);

    let actions = run(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(actions.len(), 1);
    assert!(!state.search.input_focused);
}

#[test]
fn test_modal_keys() {
    let mut state = loaded_state(2);
    run(&mut state, Message::Key(InputKey::Char('a')));
    assert!(state.modal.is_some());

    // '5' picks Friday directly
    run(&mut state, Message::Key(InputKey::Char('5')));
    assert_eq!(state.meal_plan.day(Weekday::Friday).len(), 1);
    assert!(state.modal.is_none());

    run(&mut state, Message::Key(InputKey::Char('a')));
    run(&mut state, Message::Key(InputKey::Esc));
    assert!(state.modal.is_none());
    assert_eq!(state.meal_plan.total_meals(), 1);
}

#[test]
fn test_enter_then_esc_returns_from_detail() {
    let mut state = loaded_state(2);
    run(&mut state, Message::Key(InputKey::Enter));
    assert!(state.selected_recipe.is_some());

    run(&mut state, Message::Key(InputKey::Esc));
    assert!(state.selected_recipe.is_none());
}

#[test]
fn test_r_refreshes_dashboard() {
    let mut state = loaded_state(2);
    run(&mut state, Message::SelectView(View::Chatbot));
    let actions = run(&mut state, Message::Key(InputKey::Char('r')));

    assert_eq!(state.view, View::Dashboard);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchRandomBatch { .. }]
    ));
}
