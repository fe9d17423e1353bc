//! Implementation of the single `servgen` use case.
//!
//! Responsibility: resolve the positional arguments against config
//! defaults, call the core generator service, and render the per-file
//! report. No business logic lives here.
//!
//! The handler returns `Ok(())` even when every write failed: generation
//! outcomes surface as `✗` lines, and the process keeps its exit-0
//! contract. Only a broken output stream produces an error.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use servgen_adapters::{LocalFilesystem, all_templates};
use servgen_core::{
    application::GeneratorService,
    domain::{GenerationReport, ServiceName, WriteOutcome},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the generation run.
///
/// Dispatch sequence:
/// 1. Resolve services dir and service name (positional > config default)
/// 2. Build the generator service with the production adapters
/// 3. Run the single linear pass
/// 4. Render one status line per write attempt
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve inputs
    let (services_dir, service_name) = resolve_inputs(&args, &config);

    debug!(
        services_dir = %services_dir.display(),
        service = %service_name,
        "Inputs resolved"
    );

    // 2. Create adapters and service
    let filesystem = Box::new(LocalFilesystem::new());
    let service = GeneratorService::new(filesystem, all_templates());

    // 3. Generate
    let name = ServiceName::new(service_name);
    let report = service.generate(&services_dir, &name);

    info!(
        folder = %report.folder_name,
        failures = report.failure_count(),
        "Generation finished"
    );

    // 4. Report per-file outcomes
    render_report(&report, &output)?;

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Apply the positional-over-config precedence.
fn resolve_inputs(args: &GenerateArgs, config: &AppConfig) -> (PathBuf, String) {
    let services_dir = args
        .services_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.defaults.services_dir));

    let service_name = args
        .service_name
        .clone()
        .unwrap_or_else(|| config.defaults.service_name.clone());

    (services_dir, service_name)
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn render_report(report: &GenerationReport, out: &OutputManager) -> CliResult<()> {
    if let WriteOutcome::Failed { detail } = &report.directory {
        out.failure(&format!(
            "{} could not be created.",
            report.target_dir.display()
        ))?;
        out.detail(detail)?;
    }

    for file in &report.files {
        match &file.outcome {
            WriteOutcome::Written => {
                out.success(&format!("{} successfully generated.", file.filename))?;
            }
            WriteOutcome::Failed { detail } => {
                out.failure(&format!("{} could not be generated.", file.filename))?;
                out.detail(detail)?;
            }
        }
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dir: Option<&str>, name: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            services_dir: dir.map(PathBuf::from),
            service_name: name.map(String::from),
        }
    }

    #[test]
    fn omitted_positionals_fall_back_to_config_defaults() {
        let (dir, name) = resolve_inputs(&args(None, None), &AppConfig::default());
        assert_eq!(dir, PathBuf::from("../src/services"));
        assert_eq!(name, "Demo");
    }

    #[test]
    fn positionals_override_config() {
        let (dir, name) = resolve_inputs(
            &args(Some("tmp/services"), Some("OrderBook")),
            &AppConfig::default(),
        );
        assert_eq!(dir, PathBuf::from("tmp/services"));
        assert_eq!(name, "OrderBook");
    }

    #[test]
    fn each_positional_resolves_independently() {
        let mut config = AppConfig::default();
        config.defaults.service_name = "Acme".into();

        let (dir, name) = resolve_inputs(&args(Some("svc"), None), &config);
        assert_eq!(dir, PathBuf::from("svc"));
        assert_eq!(name, "Acme");
    }
}
