//! Batch and search operations built on a [`RecipeSource`]

use futures_util::future::join_all;
use mealdeck_core::prelude::*;
use mealdeck_core::RawMeal;

use crate::client::RecipeSource;

/// Number of random meals fetched for the dashboard by default
pub const DEFAULT_BATCH_SIZE: usize = 8;

/// Fetch `n` random meals concurrently
///
/// All requests are issued at once and awaited together. Results are returned
/// in request order, not completion order. If any request fails, the whole
/// batch fails with the first error in request order; partial results are
/// dropped.
pub async fn fetch_random_batch<S: RecipeSource>(source: &S, n: usize) -> Result<Vec<RawMeal>> {
    debug!("Fetching random batch of {}", n);

    let results = join_all((0..n).map(|_| source.random_meal())).await;

    let mut meals = Vec::with_capacity(n);
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(meal) => meals.push(meal),
            Err(e) => {
                warn!("Random batch request {} of {} failed: {}", index + 1, n, e);
                return Err(e);
            }
        }
    }

    Ok(meals)
}

/// Search meals by keyword
///
/// A blank keyword is rejected with [`Error::Validation`] before any request
/// is issued.
pub async fn search<S: RecipeSource>(source: &S, keyword: &str) -> Result<Vec<RawMeal>> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(Error::validation("Enter a keyword to search"));
    }

    debug!("Searching recipes for '{}'", keyword);
    source.search(keyword).await
}
