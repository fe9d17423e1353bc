//! Infrastructure adapters for Servgen.
//!
//! This crate implements the ports defined in
//! `servgen-core::application::ports` and carries the built-in template
//! constants. It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_templates::all_templates;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
