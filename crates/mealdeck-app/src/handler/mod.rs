//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: View switching, recipe selection, cursor movement
//! - `dashboard`: Random batch refresh and its completions
//! - `search`: Search box editing, submission, and completions
//! - `meal_plan`: Add-to-plan modal and plan mutation
//! - `keys`: Key event handlers for UI modes

pub(crate) mod dashboard;
pub(crate) mod keys;
pub(crate) mod meal_plan;
pub(crate) mod navigation;
pub(crate) mod search;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch `count` random recipes for the dashboard
    FetchRandomBatch { generation: u64, count: usize },

    /// Search recipes by keyword (already trimmed, never blank)
    SearchRecipes { generation: u64, keyword: String },
}

impl UpdateAction {
    pub fn generation(&self) -> u64 {
        match self {
            UpdateAction::FetchRandomBatch { generation, .. }
            | UpdateAction::SearchRecipes { generation, .. } => *generation,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
