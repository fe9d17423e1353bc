//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `servgen-adapters` implement
//! these.

use std::path::Path;

use crate::error::ServgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `servgen_adapters::filesystem::LocalFilesystem` (production)
/// - `servgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` must be idempotent: a pre-existing directory is not
///   an error.
/// - `write_file` replaces existing content without confirmation.
/// - Every call is attempted exactly once by the service; there is no retry
///   contract for implementors to worry about.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> ServgenResult<()>;

    /// Write content to a file, overwriting any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ServgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
