//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Recipe Data Errors
    // ─────────────────────────────────────────────────────────────
    /// An upstream record is missing one of the fields a recipe cannot exist without
    #[error("Malformed recipe record: missing required field '{field}'")]
    MalformedRecord { field: &'static str },

    // ─────────────────────────────────────────────────────────────
    // Recipe Source Errors
    // ─────────────────────────────────────────────────────────────
    /// Transport failure, non-2xx status, or a response without a `meals` payload
    #[error("Recipe source unavailable: {message}")]
    SourceUnavailable { message: String },

    // ─────────────────────────────────────────────────────────────
    // Local Validation Errors
    // ─────────────────────────────────────────────────────────────
    /// Rejected before any request was issued
    #[error("Invalid input: {message}")]
    Validation { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn malformed(field: &'static str) -> Self {
        Self::MalformedRecord { field }
    }

    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Every failure of the recipe pipeline leaves the application continuable:
    /// the previous data stays on screen and the user can try again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::MalformedRecord { .. }
                | Error::SourceUnavailable { .. }
                | Error::Validation { .. }
                | Error::Json(_)
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. })
    }

    /// The short message shown to the user in place of the failed content
    pub fn user_message(&self) -> String {
        match self {
            Error::SourceUnavailable { .. } | Error::Io(_) => {
                "Failed to fetch recipes. Please try again.".to_string()
            }
            Error::MalformedRecord { .. } | Error::Json(_) => {
                "Received an unreadable recipe. Please try again.".to_string()
            }
            Error::Validation { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
