//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults surfaced in `--help`.  No business logic lives here.
//!
//! The surface is deliberately small: two optional positional arguments.
//! Their defaults live in [`crate::config::AppConfig`], not here, so that a
//! config file or `SERVGEN_*` environment variable can override them while
//! explicit positionals still win.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "servgen",
    bin_name = "servgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Service boilerplate generation",
    long_about = "Servgen derives a kebab-case folder from the service name \
                  and writes the service.ts and utils.ts stubs into it.",
    after_help = "EXAMPLES:\n\
        \x20 servgen                                # ../src/services, service 'Demo'\n\
        \x20 servgen ./src/services OrderBook       # creates ./src/services/order-book\n\
        \x20 servgen -q tmp/services myServiceName  # only failures are printed",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Positional generation arguments.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Positional arguments for the single generation use case.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory that holds generated services.
    #[arg(
        value_name = "SERVICES_DIR",
        help = "Directory of services (default: ../src/services)"
    )]
    pub services_dir: Option<PathBuf>,

    /// Name to assign to the new service.  Any casing is accepted; the
    /// folder name is derived from it.
    #[arg(
        value_name = "SERVICE_NAME",
        help = "Name of the new service (default: Demo)"
    )]
    pub service_name: Option<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_structure_is_valid() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn both_positionals_parse_in_order() {
        let cli = Cli::parse_from(["servgen", "tmp/services", "OrderBook"]);
        assert_eq!(
            cli.generate.services_dir.as_deref(),
            Some(std::path::Path::new("tmp/services"))
        );
        assert_eq!(cli.generate.service_name.as_deref(), Some("OrderBook"));
    }

    #[test]
    fn positionals_are_optional() {
        let cli = Cli::parse_from(["servgen"]);
        assert!(cli.generate.services_dir.is_none());
        assert!(cli.generate.service_name.is_none());
    }

    #[test]
    fn first_positional_alone_is_the_services_dir() {
        let cli = Cli::parse_from(["servgen", "out"]);
        assert_eq!(
            cli.generate.services_dir.as_deref(),
            Some(std::path::Path::new("out"))
        );
        assert!(cli.generate.service_name.is_none());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["servgen", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_counts_stack() {
        let cli = Cli::parse_from(["servgen", "-vv"]);
        assert_eq!(cli.global.verbose, 2);
    }
}
