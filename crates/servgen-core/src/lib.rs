//! Servgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Servgen
//! service-stub generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          servgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (GeneratorService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    servgen-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ServiceName, TemplateFile, Report)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use servgen_core::{
//!     application::GeneratorService,
//!     domain::ServiceName,
//! };
//!
//! // 1. Build the service (with injected filesystem adapter and templates)
//! let service = GeneratorService::new(filesystem, templates);
//!
//! // 2. Run the single use case
//! let report = service.generate("../src/services".as_ref(), &ServiceName::new("OrderBook"));
//! assert_eq!(report.folder_name.as_str(), "order-book");
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GeneratorService, ports::Filesystem};
    pub use crate::domain::{
        FileReport, FolderName, GenerationReport, ServiceName, TemplateFile, WriteOutcome,
    };
    pub use crate::error::{ServgenError, ServgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
