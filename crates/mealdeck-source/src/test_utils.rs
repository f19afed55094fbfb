//! Test utilities for recipe sources
//!
//! Provides a scripted [`FakeRecipeSource`] and helpers for building raw
//! meal records.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mealdeck_core::prelude::*;
use mealdeck_core::RawMeal;
use serde_json::{json, Map, Value};

use crate::client::RecipeSource;

/// Creates a raw meal record with the required fields and two ingredients.
///
/// # Arguments
/// * `id` - Upstream `idMeal`
/// * `title` - Upstream `strMeal`
pub fn sample_meal(id: &str, title: &str) -> RawMeal {
    let value = json!({
        "idMeal": id,
        "strMeal": title,
        "strMealThumb": format!("https://img.test/{id}.jpg"),
        "strCategory": "Test",
        "strArea": "Nowhere",
        "strInstructions": "Prepare.\r\n\r\nServe.",
        "strIngredient1": "Water",
        "strMeasure1": "1 cup",
        "strIngredient2": "Salt",
        "strMeasure2": "pinch",
    });
    match value {
        Value::Object(map) => RawMeal::new(map),
        _ => RawMeal::new(Map::new()),
    }
}

#[derive(Debug, Clone, Default)]
struct Script {
    fail_random_on_call: Option<usize>,
    malformed_random_on_call: Option<usize>,
    fail_search: bool,
    search_results: HashMap<String, Vec<RawMeal>>,
}

/// In-memory recipe source with scripted behavior and call counters
///
/// Random meals are numbered by call (`random-1`, `random-2`, ...). Clones share
/// counters, so a clone handed to a background task still reports its calls.
#[derive(Debug, Clone, Default)]
pub struct FakeRecipeSource {
    script: Arc<Script>,
    random_calls: Arc<AtomicUsize>,
    search_calls: Arc<AtomicUsize>,
}

impl FakeRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    // Builders run before the source is shared, so this never copies in practice
    fn script_mut(&mut self) -> &mut Script {
        Arc::make_mut(&mut self.script)
    }

    /// Fail the `call`-th random request (1-based) with `SourceUnavailable`
    pub fn fail_random_on_call(mut self, call: usize) -> Self {
        self.script_mut().fail_random_on_call = Some(call);
        self
    }

    /// Return a record without `strMeal` on the `call`-th random request
    pub fn malformed_random_on_call(mut self, call: usize) -> Self {
        self.script_mut().malformed_random_on_call = Some(call);
        self
    }

    /// Fail every search with `SourceUnavailable`
    pub fn fail_search(mut self) -> Self {
        self.script_mut().fail_search = true;
        self
    }

    /// Answer searches for `keyword` with `meals`; other keywords match nothing
    pub fn with_search_results(mut self, keyword: &str, meals: Vec<RawMeal>) -> Self {
        self.script_mut()
            .search_results
            .insert(keyword.to_string(), meals);
        self
    }

    pub fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

impl RecipeSource for FakeRecipeSource {
    async fn random_meal(&self) -> Result<RawMeal> {
        let call = self.random_calls.fetch_add(1, Ordering::SeqCst) + 1;

        if self.script.fail_random_on_call == Some(call) {
            return Err(Error::source_unavailable(format!(
                "scripted failure on call {call}"
            )));
        }

        let mut meal = sample_meal(&format!("random-{call}"), &format!("Random Meal {call}"));
        if self.script.malformed_random_on_call == Some(call) {
            let mut fields = meal.fields().clone();
            fields.remove("strMeal");
            meal = RawMeal::new(fields);
        }
        Ok(meal)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<RawMeal>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        if self.script.fail_search {
            return Err(Error::source_unavailable("scripted search failure"));
        }

        Ok(self
            .script
            .search_results
            .get(keyword)
            .cloned()
            .unwrap_or_default())
    }
}
