//! # mealdeck-core - Core Domain Types
//!
//! Foundation crate for mealdeck. Provides the canonical recipe model and its
//! normalizer, the weekly meal plan, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, rand).
//!
//! ## Public API
//!
//! ### Recipes (`recipe`)
//! - [`Recipe`] - Normalized recipe with synthesized time/health attributes
//! - [`RawMeal`] - Unmodified upstream record
//! - [`normalize()`], [`normalize_with()`], [`normalize_batch()`] - Raw -> canonical
//!
//! ### Meal Plan (`meal_plan`)
//! - [`MealPlan`] - Seven append-only day lists
//! - [`Weekday`] - Monday..Sunday
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mealdeck_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod meal_plan;
pub mod recipe;

/// Prelude for common imports used throughout all mealdeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use meal_plan::{MealPlan, Weekday};
pub use recipe::{
    normalize, normalize_batch, normalize_with, RawMeal, Recipe, RecipeId, HEALTH_SCORE_RANGE,
    INGREDIENT_SLOTS, READY_IN_MINUTES_RANGE,
};
