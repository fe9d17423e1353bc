//! Application layer errors.
//!
//! These represent failures of the machinery the application drives through
//! its ports, not business-rule violations (the domain has none — the name
//! transform is total).

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Adapter state access failed (lock poisoned, etc.).
    #[error("Adapter state poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::LockPoisoned => vec![
                "An internal adapter lock was poisoned".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_names_the_path() {
        let err = ApplicationError::Filesystem {
            path: PathBuf::from("tmp/services/demo"),
            reason: "read-only".into(),
        };
        assert!(err.to_string().contains("tmp/services/demo"));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn filesystem_suggestions_mention_permissions() {
        let err = ApplicationError::Filesystem {
            path: PathBuf::from("/x"),
            reason: "denied".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("permissions")));
    }
}
