//! Per-run generation outcomes.
//!
//! The generator never aborts on a filesystem failure; it records one
//! outcome per step and keeps going. These types are that record. The CLI
//! layer turns them into `✓` / `✗` lines; nothing here touches I/O.

use std::path::PathBuf;

use crate::domain::name::FolderName;

// ── WriteOutcome ─────────────────────────────────────────────────────────────

/// Outcome of a single filesystem step (directory creation or one file
/// write). Failures carry the underlying error text so the operator sees
/// the cause, not just the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Failed { detail: String },
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }

    /// The captured error text, if this step failed.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Written => None,
            Self::Failed { detail } => Some(detail),
        }
    }
}

// ── FileReport ───────────────────────────────────────────────────────────────

/// Outcome of one template file write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub filename: String,
    pub outcome: WriteOutcome,
}

// ── GenerationReport ─────────────────────────────────────────────────────────

/// Everything that happened during one generator run.
///
/// The run is a single linear pass: directory ensured (or not), then each
/// file attempted in order. `files` preserves the attempt order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub folder_name: FolderName,
    pub target_dir: PathBuf,
    pub directory: WriteOutcome,
    pub files: Vec<FileReport>,
}

impl GenerationReport {
    /// `true` when the directory and every file landed on disk.
    pub fn all_written(&self) -> bool {
        self.directory.is_written() && self.files.iter().all(|f| f.outcome.is_written())
    }

    /// Number of failed steps (directory plus files).
    pub fn failure_count(&self) -> usize {
        let dir = usize::from(!self.directory.is_written());
        dir + self
            .files
            .iter()
            .filter(|f| !f.outcome.is_written())
            .count()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
