//! Diagnostics output for CLI display
//!
//! All diagnostics go to stderr so that stdout stays reserved for results
//! (the run summary, or its JSON form). Three severities: trace lines for
//! visiting/skipping detail (verbose only), info lines for per-file
//! decisions, and error lines in red.

use crate::engine::RunSummary;
use colored::Colorize;

/// How much diagnostic output to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Decisions and errors
    #[default]
    Normal,
    /// Everything, including visiting/skipping detail
    Verbose,
}

/// Diagnostic sink shared by the engine and the CLI entry point
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    #[must_use]
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let verbosity = if verbose {
            Verbosity::Verbose
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        };
        Self { verbosity }
    }

    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Trace-level detail: visiting/skipping/renaming lines
    pub fn trace(&self, message: impl AsRef<str>) {
        if self.verbosity == Verbosity::Verbose {
            eprintln!("{}", message.as_ref().dimmed());
        }
    }

    /// Info-level decisions: copied, written, skipped, previewed
    pub fn info(&self, message: impl AsRef<str>) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("{}", message.as_ref());
        }
    }

    /// Errors, always emitted
    pub fn error(&self, message: impl AsRef<str>) {
        eprintln!("{}", message.as_ref().red());
    }
}

/// Render the run summary as a single human-readable line
#[must_use]
pub fn summary_line(summary: &RunSummary) -> String {
    format!(
        "{} written, {} copied, {} previewed, {} skipped (existing), {} excluded files, {} excluded dirs, {} stale dirs removed",
        summary.written,
        summary.copied,
        summary.previewed,
        summary.skipped_existing,
        summary.skipped_excluded,
        summary.excluded_dirs,
        summary.stale_dirs_removed,
    )
}

/// Print the run summary to stdout unless quiet
pub fn print_summary(summary: &RunSummary, quiet: bool) {
    if !quiet {
        println!("{}", summary_line(summary));
    }
}
