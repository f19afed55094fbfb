//! mealdeck Library
//!
//! Startup wiring for the `mealdeck` binary: settings resolution, recipe
//! source construction, and the headless NDJSON runner.

pub mod app;
pub mod headless;

// Re-export main entry points
pub use app::run;
pub use headless::run_headless;
