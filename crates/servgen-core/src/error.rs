//! Unified error handling for Servgen Core.
//!
//! Generation *outcomes* (a file that could not be written) are not errors —
//! they travel in `GenerationReport`. The types here cover failures of the
//! machinery itself: adapter I/O mapped through the application layer, and
//! genuine bugs.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Servgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum ServgenError {
    /// Errors from the application layer (orchestration / adapters).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ServgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Servgen".into(),
                "Please report this issue at: https://github.com/cosecruz/servgen/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type ServgenResult<T> = Result<T, ServgenError>;
