//! mealdeck-source - Recipe source client for mealdeck
//!
//! Talks to the external recipe API (TheMealDB) and hands raw records to the
//! normalizer in `mealdeck-core`. The [`RecipeSource`] trait is the seam the
//! application depends on; [`HttpRecipeSource`] is the production implementation.
//!
//! ## Public API
//!
//! - [`RecipeSource`] - `random_meal()` / `search()` primitives
//! - [`HttpRecipeSource`] - reqwest-backed implementation
//! - [`fetch_random_batch()`] - concurrent, order-preserving, all-or-nothing batch
//! - [`search()`] - keyword search with local validation

pub mod client;
pub mod fetch;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpRecipeSource, LocalRecipeSource, RecipeSource};
pub use fetch::{fetch_random_batch, search, DEFAULT_BATCH_SIZE};
pub use protocol::{MealsResponse, DEFAULT_BASE_URL};
