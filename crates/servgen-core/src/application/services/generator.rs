//! Generator service - main application orchestrator.
//!
//! This service runs the single use case end to end:
//! 1. Derive the kebab-case folder name
//! 2. Ensure the target directory exists
//! 3. Write each template file
//!
//! The whole run is one linear pass with no retries. Filesystem failures
//! are *recorded*, never propagated: a directory-creation failure does not
//! suppress the file writes, and one file's failure does not block the
//! other's attempt. Callers inspect the returned [`GenerationReport`].

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{FileReport, GenerationReport, ServiceName, TemplateFile, WriteOutcome},
};

/// Main generator service.
///
/// Holds the filesystem adapter and the fixed set of template files to
/// emit. Both are injected at construction; the service itself is stateless
/// across runs.
pub struct GeneratorService {
    filesystem: Box<dyn Filesystem>,
    templates: Vec<TemplateFile>,
}

impl GeneratorService {
    /// Create a new generator service with the given adapter and templates.
    ///
    /// Templates are written in the order given.
    pub fn new(filesystem: Box<dyn Filesystem>, templates: Vec<TemplateFile>) -> Self {
        Self {
            filesystem,
            templates,
        }
    }

    /// Generate the service stubs under `{services_dir}/{folder_name}`.
    ///
    /// Always returns a full report; the `Err` path is reserved for bugs,
    /// not for filesystem outcomes.
    #[instrument(
        skip_all,
        fields(service = %name, services_dir = %services_dir.display())
    )]
    pub fn generate(&self, services_dir: &Path, name: &ServiceName) -> GenerationReport {
        let folder_name = name.folder_name();
        let target_dir = services_dir.join(folder_name.as_str());

        info!(folder = %folder_name, "Generating service stubs");

        // Best effort: a failure here is recorded and the file writes below
        // still run. Each write then fails (or succeeds) on its own.
        let directory = match self.filesystem.create_dir_all(&target_dir) {
            Ok(()) => WriteOutcome::Written,
            Err(e) => {
                warn!(path = %target_dir.display(), error = %e, "Directory creation failed");
                WriteOutcome::Failed {
                    detail: e.to_string(),
                }
            }
        };

        let files = self
            .templates
            .iter()
            .map(|template| {
                let path = target_dir.join(&template.filename);
                let outcome = match self.filesystem.write_file(&path, &template.content) {
                    Ok(()) => {
                        info!(file = %template.filename, "Stub written");
                        WriteOutcome::Written
                    }
                    Err(e) => {
                        warn!(file = %template.filename, error = %e, "Stub write failed");
                        WriteOutcome::Failed {
                            detail: e.to_string(),
                        }
                    }
                };
                FileReport {
                    filename: template.filename.clone(),
                    outcome,
                }
            })
            .collect();

        info!("Generation pass completed");

        GenerationReport {
            folder_name,
            target_dir,
            directory,
            files,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
