//! Application state (Model in TEA pattern)

use mealdeck_core::{MealPlan, Recipe, Weekday};

use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Top-level screen
///
/// Closed set with an explicit fallback: any tag that does not name a known
/// screen becomes [`View::Other`] and renders a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Search,
    MealPlan,
    Chatbot,
    MyRecipes,
    Other(String),
}

impl View {
    /// Screens reachable from the navigation bar, in display order
    pub fn navigable() -> [View; 5] {
        [
            View::Dashboard,
            View::Search,
            View::MealPlan,
            View::Chatbot,
            View::MyRecipes,
        ]
    }

    pub fn from_tag(tag: &str) -> View {
        match tag {
            "dashboard" => View::Dashboard,
            "search" => View::Search,
            "meal-plan" => View::MealPlan,
            "chatbot" => View::Chatbot,
            "my-recipes" => View::MyRecipes,
            other => View::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            View::Dashboard => "dashboard",
            View::Search => "search",
            View::MealPlan => "meal-plan",
            View::Chatbot => "chatbot",
            View::MyRecipes => "my-recipes",
            View::Other(tag) => tag,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            View::Dashboard => "Dashboard",
            View::Search => "Search",
            View::MealPlan => "Meal Plan",
            View::Chatbot => "Chatbot",
            View::MyRecipes => "My Recipes",
            View::Other(tag) => tag,
        }
    }

    /// Screens without content of their own
    pub fn is_placeholder(&self) -> bool {
        matches!(self, View::Chatbot | View::MyRecipes | View::Other(_))
    }

    /// Position in [`View::navigable`], if the view is navigable
    pub fn nav_index(&self) -> Option<usize> {
        View::navigable().iter().position(|v| v == self)
    }
}

/// Keyword search screen state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text currently in the search box
    pub query: String,
    /// Keyword of the last submitted search
    pub last_keyword: Option<String>,
    pub results: Vec<Recipe>,
    /// A search was submitted; distinguishes "no results" from "not searched yet"
    pub searched: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Keystrokes go to the search box
    pub input_focused: bool,
}

impl SearchState {
    /// Back to "never searched": no results, no error, nothing in flight
    pub fn reset_results(&mut self) {
        self.results.clear();
        self.last_keyword = None;
        self.searched = false;
        self.is_loading = false;
        self.error = None;
    }

    /// Searched, finished, and found nothing
    pub fn is_empty_result(&self) -> bool {
        self.searched && !self.is_loading && self.error.is_none() && self.results.is_empty()
    }
}

/// Pending "add to meal plan" request
#[derive(Debug, Clone)]
pub struct AddToPlanModal {
    /// The staged recipe
    pub recipe: Recipe,
    /// Highlighted day in the picker
    pub day_cursor: usize,
}

impl AddToPlanModal {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            day_cursor: 0,
        }
    }

    pub fn selected_day(&self) -> Weekday {
        Weekday::from_index(self.day_cursor)
    }

    pub fn next_day(&mut self) {
        self.day_cursor = (self.day_cursor + 1) % Weekday::ALL.len();
    }

    pub fn prev_day(&mut self) {
        self.day_cursor = (self.day_cursor + Weekday::ALL.len() - 1) % Weekday::ALL.len();
    }
}

/// Complete application state
///
/// The single owner of navigation, fetch status, and the meal plan. Only
/// [`crate::handler::update`] mutates it.
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Active screen
    pub view: View,

    /// When set, the detail page is shown instead of `view`
    pub selected_recipe: Option<Recipe>,

    /// Dashboard collection from the most recent successful fetch
    pub recipes: Vec<Recipe>,
    pub is_loading: bool,
    pub error: Option<String>,

    pub search: SearchState,

    pub meal_plan: MealPlan,

    pub modal: Option<AddToPlanModal>,

    /// Tag of the newest request; completions carrying any other value are stale
    pub generation: u64,

    /// Highlighted row in the current list
    pub cursor: usize,

    /// Scroll offset of the detail page
    pub detail_scroll: u16,

    /// Ticks since start, drives the loading spinner
    pub tick_count: u64,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            view: View::Dashboard,
            selected_recipe: None,
            recipes: Vec::new(),
            is_loading: false,
            error: None,
            search: SearchState::default(),
            meal_plan: MealPlan::new(),
            modal: None,
            generation: 0,
            cursor: 0,
            detail_scroll: 0,
            tick_count: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Start a new request generation
    ///
    /// Every in-flight request becomes stale, so the loading flags they own are
    /// cleared here; the caller sets the flag for the request it is about to
    /// issue. An abandoned search never answers, so the Search screen goes
    /// back to its prompt instead of reporting an empty result.
    pub fn begin_generation(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = false;
        if self.search.is_loading {
            self.search.is_loading = false;
            self.search.searched = false;
        }
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Recipes listed on the current screen, in display order
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        match self.view {
            View::Dashboard => self.recipes.iter().collect(),
            View::Search => self.search.results.iter().collect(),
            View::MealPlan => self
                .meal_plan
                .iter()
                .flat_map(|(_, recipes)| recipes.iter())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn recipe_under_cursor(&self) -> Option<&Recipe> {
        self.visible_recipes().get(self.cursor).copied()
    }

    /// Keep the cursor inside the current list
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_recipes().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn is_any_loading(&self) -> bool {
        self.is_loading || self.search.is_loading
    }
}
