//! Application layer for Servgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The name transform and the report model live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main service
pub use services::GeneratorService;

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
