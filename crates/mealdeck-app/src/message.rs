//! Message types for the application (TEA pattern)

use mealdeck_core::{Recipe, Weekday};

use crate::input_key::InputKey;
use crate::state::View;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (`q`, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch the active screen
    SelectView(View),

    /// Switch to the next navigable screen (wraps)
    NextView,

    /// Switch to the previous navigable screen (wraps)
    PreviousView,

    /// Show the detail page for a recipe
    SelectRecipe(Recipe),

    /// Leave the detail page
    ClearSelection,

    CursorUp,
    CursorDown,

    /// Open the detail page for the highlighted row
    OpenUnderCursor,

    DetailScrollUp,
    DetailScrollDown,

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    /// Fetch a new random batch for the dashboard
    RefreshDashboard,

    /// Random batch fetched and normalized
    DashboardLoaded {
        generation: u64,
        recipes: Vec<Recipe>,
    },

    /// Random batch failed; `error` is user-facing
    DashboardFailed { generation: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    /// Move keystrokes into the search box (switches to Search)
    FocusSearch,

    /// Stop typing into the search box
    BlurSearch,

    /// Append a character to the search box
    SearchInput(char),

    /// Delete the last character of the search box
    SearchBackspace,

    /// Empty the search box
    SearchClear,

    /// Search for the text in the search box
    SubmitSearch,

    /// Replace the search box with `keyword` and submit it
    SearchFor(String),

    /// Search finished; `recipes` may be empty
    SearchCompleted {
        generation: u64,
        keyword: String,
        recipes: Vec<Recipe>,
    },

    /// Search failed; `error` is user-facing
    SearchFailed {
        generation: u64,
        keyword: String,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Meal Plan
    // ─────────────────────────────────────────────────────────
    /// Stage a recipe and show the day picker
    OpenAddToPlan(Recipe),

    /// Stage the highlighted (or currently shown) recipe
    StageUnderCursor,

    /// Dismiss the day picker and drop the staged recipe
    CloseModal,

    ModalDayPrev,
    ModalDayNext,

    /// Add the staged recipe to the highlighted day
    ConfirmModal,

    /// Append the staged recipe to `day` and close the picker
    AddToPlan(Weekday),
}
