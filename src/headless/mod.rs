//! Headless mode - NDJSON event output
//!
//! Drives the same update loop as the TUI without a terminal and writes one
//! JSON object per line to stdout, so scripts can consume recipe fetches.
//!
//! # Example Output
//!
//! ```json
//! {"event":"recipes_loaded","count":8,"recipes":[...],"timestamp":1704700001000}
//! {"event":"search_completed","keyword":"curry","count":0,"recipes":[],"timestamp":1704700002000}
//! {"event":"fetch_failed","error":"Failed to fetch recipes. Please try again.","timestamp":1704700003000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use mealdeck_core::Recipe;
use serde::Serialize;
use tracing::error;

pub use runner::run_headless;

/// Compact recipe description carried by headless events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub ready_in_minutes: u32,
    pub health_score: u32,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            title: recipe.title.clone(),
            ready_in_minutes: recipe.ready_in_minutes,
            health_score: recipe.health_score,
        }
    }
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A dashboard batch was fetched and normalized
    RecipesLoaded {
        count: usize,
        recipes: Vec<RecipeSummary>,
        timestamp: i64,
    },

    /// A dashboard batch failed as a whole
    FetchFailed { error: String, timestamp: i64 },

    /// A keyword search finished (possibly with no matches)
    SearchCompleted {
        keyword: String,
        count: usize,
        recipes: Vec<RecipeSummary>,
        timestamp: i64,
    },

    /// A keyword search failed
    SearchFailed {
        keyword: String,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit event to stdout as NDJSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn recipes_loaded(recipes: &[Recipe]) -> Self {
        Self::RecipesLoaded {
            count: recipes.len(),
            recipes: recipes.iter().map(RecipeSummary::from).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn fetch_failed(error: &str) -> Self {
        Self::FetchFailed {
            error: error.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn search_completed(keyword: &str, recipes: &[Recipe]) -> Self {
        Self::SearchCompleted {
            keyword: keyword.to_string(),
            count: recipes.len(),
            recipes: recipes.iter().map(RecipeSummary::from).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn search_failed(keyword: &str, error: &str) -> Self {
        Self::SearchFailed {
            keyword: keyword.to_string(),
            error: error.to_string(),
            timestamp: Self::now(),
        }
    }
}
