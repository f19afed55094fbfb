//! Custom widget components

mod add_to_plan;
mod header;
mod meal_plan;
pub mod modal_overlay;
mod placeholder;
mod recipe_detail;
mod recipe_list;
mod search_input;
mod status_bar;
mod text;

pub use add_to_plan::AddToPlanDialog;
pub use header::MainHeader;
pub use meal_plan::MealPlanView;
pub use placeholder::Placeholder;
pub use recipe_detail::RecipeDetail;
pub use recipe_list::RecipeList;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;
pub use text::truncate_to_width;
