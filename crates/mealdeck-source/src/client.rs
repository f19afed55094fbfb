//! HTTP client for the recipe source API
//!
//! [`RecipeSource`] is the seam between the application and the outside world:
//! the app only ever asks for "one random meal" or "meals matching a keyword".
//! [`HttpRecipeSource`] implements it over reqwest; tests substitute
//! [`crate::test_utils::FakeRecipeSource`].

use std::time::Duration;

use mealdeck_core::prelude::*;
use mealdeck_core::RawMeal;
use reqwest::Client;
use url::Url;

use crate::protocol::{MealsResponse, RANDOM_PATH, SEARCH_PARAM, SEARCH_PATH};

/// Primitive operations of a recipe source
#[trait_variant::make(RecipeSource: Send)]
pub trait LocalRecipeSource {
    /// Fetch one random meal record
    async fn random_meal(&self) -> Result<RawMeal>;

    /// Fetch all meal records whose name matches `keyword`
    ///
    /// No matches is `Ok(vec![])`, not an error.
    async fn search(&self, keyword: &str) -> Result<Vec<RawMeal>>;
}

/// Recipe source backed by the TheMealDB HTTP API
#[derive(Debug, Clone)]
pub struct HttpRecipeSource {
    client: Client,
    base_url: Url,
}

impl HttpRecipeSource {
    /// Create a client without a request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client; `timeout` bounds each request including the body read
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        // Url::join replaces the last segment unless the base ends with '/'
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::config(format!("Invalid recipe source URL '{base_url}': {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config(format!("Invalid endpoint '{path}': {e}")))
    }

    async fn get(&self, url: Url) -> Result<MealsResponse> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::source_unavailable(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recipe source returned {} for {}", status, url);
            return Err(Error::source_unavailable(format!(
                "{url} returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::source_unavailable(format!("reading body of {url}: {e}")))?;

        MealsResponse::parse(&body)
            .map_err(|e| Error::source_unavailable(format!("undecodable body from {url}: {e}")))
    }
}

impl RecipeSource for HttpRecipeSource {
    async fn random_meal(&self) -> Result<RawMeal> {
        let url = self.endpoint(RANDOM_PATH)?;
        self.get(url).await?.into_single()
    }

    async fn search(&self, keyword: &str) -> Result<Vec<RawMeal>> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        url.query_pairs_mut().append_pair(SEARCH_PARAM, keyword);
        Ok(self.get(url).await?.into_matches())
    }
}

#[cfg(test)]
mod tests {
    // Importing only the Send variant keeps method calls unambiguous
    use super::{HttpRecipeSource, RecipeSource};
    use mealdeck_core::Error;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn meal_json(id: &str, title: &str) -> serde_json::Value {
        json!({
            "idMeal": id,
            "strMeal": title,
            "strMealThumb": format!("https://img.test/{id}.jpg"),
            "strInstructions": "Step one.\r\nStep two.",
            "strIngredient1": "Rice",
            "strMeasure1": "1 cup",
        })
    }

    #[tokio::test]
    async fn test_random_meal_returns_first_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "meals": [meal_json("1", "Kedgeree")] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpRecipeSource::new(&server.uri()).unwrap();
        let meal = source.random_meal().await.unwrap();
        assert_eq!(meal.field("strMeal").as_deref(), Some("Kedgeree"));
    }

    #[tokio::test]
    async fn test_base_url_with_path_keeps_its_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/json/v1/1/random.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "meals": [meal_json("2", "Poutine")] })),
            )
            .mount(&server)
            .await;

        let base = format!("{}/api/json/v1/1", server.uri());
        let source = HttpRecipeSource::new(&base).unwrap();
        assert!(source.random_meal().await.is_ok());
    }

    #[tokio::test]
    async fn test_non_success_status_is_source_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = HttpRecipeSource::new(&server.uri()).unwrap();
        let err = source.random_meal().await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_random_without_meals_is_source_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
            .mount(&server)
            .await;

        let source = HttpRecipeSource::new(&server.uri()).unwrap();
        let err = source.random_meal().await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_source_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = HttpRecipeSource::new(&server.uri()).unwrap();
        let err = source.random_meal().await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_search_sends_keyword_and_returns_matches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("s", "chicken curry"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "meals": [meal_json("10", "Chicken Curry"), meal_json("11", "Curry Chicken Pie")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let source = HttpRecipeSource::new(&server.uri()).unwrap();
        let matches = source.search("chicken curry").await.unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn test_search_null_meals_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("s", "zzznomatch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
            .mount(&server)
            .await;

        let source = HttpRecipeSource::new(&server.uri()).unwrap();
        assert!(source.search("zzznomatch").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_source_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/random.php"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "meals": [meal_json("3", "Slow")] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let source =
            HttpRecipeSource::with_timeout(&server.uri(), Some(Duration::from_millis(50))).unwrap();
        let err = source.random_meal().await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = HttpRecipeSource::new("not a url").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
