//! Rebrand CLI application entry point
//!
//! Parses the command line, loads the optional user configuration,
//! assembles the traversal engine and runs it. Diagnostics go to stderr;
//! the run summary (human-readable, or JSON with `--json`) goes to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Rebrand a checked-out template in place
//! rebrand --from . --exclude auto --exclude-filtering auto \
//!     --renaming com.old=com.new --overwrite
//!
//! # Preview what a folder-renaming run would do
//! rebrand --from ./tree --renaming old-module=new-module \
//!     --rename-folders --dry-run
//! ```

use clap::CommandFactory;
use colored::Colorize;
use rebrand::{
    RebrandError,
    cli::Cli,
    config::RebrandConfig,
    engine::{Engine, ModeFlags},
    output::{self, Reporter},
    patterns::PatternSet,
    rules::RuleSet,
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, RebrandError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "rebrand", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RebrandConfig::load()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(from) = cli.from else {
        return Err(RebrandError::InvalidInput("--from is required".to_string()));
    };

    let quiet = cli.quiet || (config.quiet && !cli.verbose);
    let reporter = Reporter::new(quiet, cli.verbose);

    let excludes = PatternSet::from_specs(&cli.excludes, &config.auto_excludes)?;
    let exclude_filtering = PatternSet::from_specs(&cli.exclude_filtering, &config.auto_filtering)?;
    let rules = RuleSet::parse(&cli.renamings)?;

    let modes = ModeFlags {
        dry_run: cli.dry_run,
        rename_folders: cli.rename_folders,
        overwrite: cli.overwrite,
    };

    let engine = Engine::new(from, cli.to, excludes, exclude_filtering, rules, modes, reporter)?;
    let summary = engine.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::print_summary(&summary, quiet);
    }

    Ok(())
}
