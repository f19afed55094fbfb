//! Application bootstrap shared by the TUI and headless modes

use std::path::PathBuf;

use mealdeck_app::config::{self, Settings};
use mealdeck_core::prelude::*;
use mealdeck_source::HttpRecipeSource;

use crate::headless;

/// Command-line choices that shape a run
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub config_dir: Option<PathBuf>,
    pub api_base: Option<String>,
    pub batch_size: Option<usize>,
    pub headless: bool,
    pub search: Option<String>,
    pub init_config: bool,
}

impl LaunchOptions {
    /// Apply command-line overrides on top of file settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(base_url) = &self.api_base {
            settings.source.base_url = base_url.clone();
        }
        if let Some(batch_size) = self.batch_size {
            settings.dashboard.batch_size = batch_size;
        }
    }
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    mealdeck_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!(
        "mealdeck starting{}",
        if options.headless { " in HEADLESS mode" } else { "" }
    );
    info!("═══════════════════════════════════════════════════════");

    let config_dir = options
        .config_dir
        .clone()
        .unwrap_or_else(config::default_config_dir);
    if options.init_config {
        config::init_config_dir(&config_dir)?;
    }

    let mut settings = config::load_settings(&config_dir);
    options.apply_overrides(&mut settings);
    info!(
        "Recipe source {} (batch size {})",
        settings.source.base_url, settings.dashboard.batch_size
    );

    let source =
        HttpRecipeSource::with_timeout(&settings.source.base_url, settings.source.request_timeout())?;

    let result = if options.headless {
        headless::run_headless(settings, source, options.search).await
    } else {
        mealdeck_tui::run(settings, source, options.search).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("mealdeck exiting");
    result
}
