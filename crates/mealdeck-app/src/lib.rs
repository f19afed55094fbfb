//! mealdeck-app - Application state and orchestration for mealdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`handler::update`] the update
//! function, and [`actions::handle_action`] runs the recipe fetches that
//! updates request. It also owns configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AddToPlanModal, AppPhase, AppState, SearchState, View};
