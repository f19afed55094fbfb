//! Configuration types for mealdeck
//!
//! Defines `Settings` (config.toml) and its sections.

use std::time::Duration;

use mealdeck_source::{DEFAULT_BASE_URL, DEFAULT_BATCH_SIZE};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Recipe source connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Base URL of the TheMealDB-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (0 = wait indefinitely)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SourceSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

/// Dashboard behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardSettings {
    /// Number of random recipes fetched per refresh
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Show key hints in the status line
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_key_hints: true,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}
