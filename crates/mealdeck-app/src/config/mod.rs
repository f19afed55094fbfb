//! Configuration file parsing for mealdeck
//!
//! Supports `<config dir>/config.toml` (see [`default_config_dir`]).

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings, CONFIG_FILENAME};
pub use types::*;
