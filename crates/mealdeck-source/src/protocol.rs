//! Wire format of the recipe source API
//!
//! Both endpoints answer with the same envelope:
//!
//! ```json
//! { "meals": [ { "idMeal": "52772", "strMeal": "...", ... } ] }
//! ```
//!
//! `meals` is `null` when a search has no matches.

use mealdeck_core::prelude::*;
use mealdeck_core::RawMeal;
use serde::Deserialize;

/// Default base URL of the public TheMealDB v1 API (test key `1`)
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Path of the single-random-meal endpoint
pub const RANDOM_PATH: &str = "random.php";

/// Path of the search-by-name endpoint
pub const SEARCH_PATH: &str = "search.php";

/// Query parameter carrying the search keyword
pub const SEARCH_PARAM: &str = "s";

/// Response envelope shared by all endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<RawMeal>>,
}

impl MealsResponse {
    /// Parse a response body
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The single record of a `random.php` response
    ///
    /// A missing, null, or empty `meals` payload means the source did not
    /// deliver, which is reported as [`Error::SourceUnavailable`].
    pub fn into_single(self) -> Result<RawMeal> {
        self.meals
            .and_then(|meals| meals.into_iter().next())
            .ok_or_else(|| Error::source_unavailable("response has no meals payload"))
    }

    /// All records of a `search.php` response; no matches is an empty list
    pub fn into_matches(self) -> Vec<RawMeal> {
        self.meals.unwrap_or_default()
    }
}
