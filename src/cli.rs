//! Command-line interface definitions and parsing
//!
//! This module defines the CLI surface for rebrand using the `clap` crate.
//! Argument parsing only collects raw specifications; patterns and rules
//! are compiled by their own modules so malformed specs fail fast before
//! any traversal.
//!
//! # Examples
//!
//! ```bash
//! # Preview a rebranding run
//! rebrand --from ./template --renaming 'com.old=com.new?ext=java' --dry-run
//!
//! # In-place rewrite, also renaming folders, with the built-in excludes
//! rebrand --from . --exclude auto --exclude-filtering auto \
//!     --renaming old-module=new-module --rename-folders --overwrite
//!
//! # Copy to a new tree with case-variant rules
//! rebrand --from ./template --to ./out --renaming 'old-name=new-name?cases'
//! ```

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Rule-driven find-and-replace across a file tree
#[derive(Parser, Debug)]
#[command(name = "rebrand", version, about)]
pub struct Cli {
    /// Source tree to transform (must exist)
    #[arg(long, value_name = "PATH", required_unless_present_any = ["completions", "print_config"])]
    pub from: Option<PathBuf>,

    /// Destination tree; defaults to the source tree (in-place)
    #[arg(long, value_name = "PATH")]
    pub to: Option<PathBuf>,

    /// Exclude entries by bare name: `name`, `name*`, `*name`, `r/regex`,
    /// `g/glob`, or `auto` for the built-in list
    #[arg(long = "exclude", value_name = "SPEC")]
    pub excludes: Vec<String>,

    /// Copy matching files byte-for-byte instead of rewriting their content
    /// (same syntax as --exclude; `auto` covers common binary assets)
    #[arg(long = "exclude-filtering", value_name = "SPEC")]
    pub exclude_filtering: Vec<String>,

    /// Replacement rule `<before>=<after>[?ext=java,ts][&cases]`, applied
    /// in the order given
    #[arg(long = "renaming", value_name = "RULE")]
    pub renamings: Vec<String>,

    /// Report every intended change without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Apply replacement rules to relative paths and prune renamed folders
    #[arg(long)]
    pub rename_folders: bool,

    /// Replace destination files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit trace-level diagnostics (visiting/skipping detail)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_full_invocation() {
        let cli = Cli::try_parse_from([
            "rebrand",
            "--from",
            "template",
            "--to",
            "out",
            "--exclude",
            "auto",
            "--exclude",
            "*.lock",
            "--exclude-filtering",
            "auto",
            "--renaming",
            "com.old=com.new?ext=java",
            "--renaming",
            "old-module=new-module",
            "--rename-folders",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.from, Some(PathBuf::from("template")));
        assert_eq!(cli.to, Some(PathBuf::from("out")));
        assert_eq!(cli.excludes, vec!["auto", "*.lock"]);
        assert_eq!(cli.renamings.len(), 2);
        assert!(cli.dry_run);
        assert!(cli.rename_folders);
        assert!(!cli.overwrite);
    }

    #[test]
    fn from_is_required_for_a_run() {
        assert!(Cli::try_parse_from(["rebrand", "--renaming", "a=b"]).is_err());
        // ...but not for the print-and-exit modes
        assert!(Cli::try_parse_from(["rebrand", "--print-config"]).is_ok());
        assert!(Cli::try_parse_from(["rebrand", "--completions", "bash"]).is_ok());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["rebrand", "--from", ".", "-q", "-v"]).is_err());
    }
}
