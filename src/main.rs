//! mealdeck - Terminal recipe browser and weekly meal planner
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use mealdeck::app::LaunchOptions;
use mealdeck_core::prelude::*;

/// mealdeck - browse random recipes, search by name, and plan your week
#[derive(Parser, Debug)]
#[command(name = "mealdeck")]
#[command(about = "Terminal recipe browser and weekly meal planner", long_about = None)]
struct Args {
    /// Config directory (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Recipe API base URL (overrides config)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Random recipes per dashboard refresh (overrides config)
    #[arg(long, value_name = "N")]
    batch_size: Option<usize>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Search for this keyword after the dashboard loads
    #[arg(long, value_name = "KEYWORD")]
    search: Option<String>,

    /// Write a default config.toml if none exists
    #[arg(long)]
    init_config: bool,
}

impl From<Args> for LaunchOptions {
    fn from(args: Args) -> Self {
        Self {
            config_dir: args.config,
            api_base: args.api_base,
            batch_size: args.batch_size,
            headless: args.headless,
            search: args.search,
            init_config: args.init_config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    mealdeck::app::run(args.into()).await
}
