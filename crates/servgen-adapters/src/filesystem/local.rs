//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use servgen_core::{application::ports::Filesystem, error::ServgenResult};

/// Production filesystem implementation using `std::fs`.
///
/// `create_dir_all` inherits std's idempotence: an existing directory is
/// not an error. `write_file` truncates and replaces existing content.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ServgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ServgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> servgen_core::error::ServgenError {
    use servgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
