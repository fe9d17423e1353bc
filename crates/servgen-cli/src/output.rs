//! Output management and formatting.
//!
//! The operator-visible report is one line per write attempt: a `✓` line
//! for a landed file, a `✗` line plus the captured error detail for a
//! failed one.  Failure lines are never suppressed — `--quiet` only mutes
//! the success side.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn colored(&self) -> bool {
        !self.no_color && self.resolved_format == OutputFormat::Human
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        } else {
            format!("\u{2713} {msg}") // ✓
        };
        self.term.write_line(&line)
    }

    /// Failure indicator: `✗ <msg>`.  *Not* suppressed in quiet mode —
    /// failures must always be visible.
    pub fn failure(&self, msg: &str) -> io::Result<()> {
        let line = if self.colored() {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        } else {
            format!("\u{2717} {msg}") // ✗
        };
        self.term.write_line(&line)
    }

    /// Indented error detail under a failure line.  Not suppressed in
    /// quiet mode either; the detail belongs to the failure.
    pub fn detail(&self, msg: &str) -> io::Result<()> {
        let line = if self.colored() {
            format!("  {}", msg.dimmed())
        } else {
            format!("  {msg}")
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
