//! Traversal-and-transform engine
//!
//! Walks the source tree depth-first, decides per entry whether to skip,
//! copy verbatim or rewrite-and-place, and — in in-place folder-renaming
//! runs — prunes directories whose contents were rewritten under a renamed
//! path. Everything the engine needs is constructed once up front and stays
//! immutable for the whole run; the only mutable state is the filesystem
//! and the walk itself.

pub mod error;
pub mod summary;

pub use error::EngineError;
pub use summary::{RunSummary, VisitOutcome};

use crate::output::Reporter;
use crate::patterns::PatternSet;
use crate::rules::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Run-wide behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeFlags {
    /// Report intended changes without touching the filesystem
    pub dry_run: bool,
    /// Pass relative paths through the replacement pipeline and prune
    /// stale renamed directories
    pub rename_folders: bool,
    /// Allow replacing destination files that already exist
    pub overwrite: bool,
}

/// The traversal engine. Construct once via [`Engine::new`], then [`run`].
///
/// [`run`]: Engine::run
pub struct Engine {
    from: PathBuf,
    to: PathBuf,
    excludes: PatternSet,
    exclude_filtering: PatternSet,
    rules: RuleSet,
    modes: ModeFlags,
    /// Resolved once at construction; never re-derived per file
    in_place: bool,
    reporter: Reporter,
}

impl Engine {
    /// Assemble an engine from configuration. The destination defaults to
    /// the source root (in-place mode) when unset or equal.
    ///
    /// # Errors
    /// Returns `EngineError::MissingSource` if the source root does not exist.
    pub fn new(
        from: PathBuf,
        to: Option<PathBuf>,
        excludes: PatternSet,
        exclude_filtering: PatternSet,
        rules: RuleSet,
        modes: ModeFlags,
        reporter: Reporter,
    ) -> Result<Self, EngineError> {
        if !from.exists() {
            return Err(EngineError::MissingSource(from));
        }
        let (to, in_place) = match to {
            Some(t) if t != from => (t, false),
            _ => (from.clone(), true),
        };
        Ok(Self {
            from,
            to,
            excludes,
            exclude_filtering,
            rules,
            modes,
            in_place,
            reporter,
        })
    }

    /// Whether this run rewrites the source tree itself
    #[must_use]
    pub const fn is_in_place(&self) -> bool {
        self.in_place
    }

    /// Walk the source tree and apply the configured transformation.
    ///
    /// # Errors
    /// Returns the first I/O failure; the destination tree may be left
    /// partially transformed.
    pub fn run(&self) -> Result<RunSummary, EngineError> {
        self.reporter.trace(format!(
            "Configuration\nfrom: {}\nto: {}\nexcludes: {}\nexclude-filtering: {}\nrenamings: {}\ndry run: {}\nrename folders: {}\noverwrite: {}",
            self.from.display(),
            self.to.display(),
            self.excludes,
            self.exclude_filtering,
            self.rules,
            self.modes.dry_run,
            self.modes.rename_folders,
            self.modes.overwrite,
        ));

        let mut summary = RunSummary::default();
        if self.excludes.matches(&bare_name(&self.from)) {
            self.reporter
                .trace(format!("Skipping {}", self.from.display()));
            summary.excluded_dirs += 1;
            return Ok(summary);
        }
        self.visit_dir(&self.from, &mut summary)?;
        Ok(summary)
    }

    /// Visit one directory: process children first, then reconcile the
    /// directory itself. Children are snapshot before processing so trees
    /// the run writes next to them are never re-visited.
    fn visit_dir(&self, dir: &Path, summary: &mut RunSummary) -> Result<(), EngineError> {
        self.reporter.trace(format!("Visiting {}", dir.display()));

        let mut entries = Vec::new();
        let listing = fs::read_dir(dir).map_err(|source| EngineError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in listing {
            let entry = entry.map_err(|source| EngineError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let is_dir = entry
                .file_type()
                .map_err(|source| EngineError::ReadDir {
                    path: entry.path(),
                    source,
                })?
                .is_dir();
            entries.push((entry.path(), is_dir));
        }
        entries.sort();

        for (path, is_dir) in entries {
            let name = bare_name(&path);
            if is_dir {
                if self.excludes.matches(&name) {
                    self.reporter.trace(format!("Skipping {}", path.display()));
                    summary.excluded_dirs += 1;
                    continue;
                }
                self.visit_dir(&path, summary)?;
            } else if self.excludes.matches(&name) {
                self.reporter.trace(format!("Skipping {}", path.display()));
                summary.record(VisitOutcome::SkippedExcluded);
            } else {
                let outcome = self.transfer_file(&path, &name)?;
                summary.record(outcome);
            }
        }

        self.reconcile_dir(dir, summary)
    }

    /// Transfer policy for one non-excluded file.
    fn transfer_file(&self, file: &Path, name: &str) -> Result<VisitOutcome, EngineError> {
        self.reporter.trace(format!("Replacing {}", file.display()));
        let target = self.target_path(file);

        // Filtering-excluded files are verbatim-copy candidates
        if self.exclude_filtering.matches(name) {
            if self.modes.dry_run {
                self.reporter.info(format!(
                    "[dry-run] Copying {} to {}",
                    file.display(),
                    target.display()
                ));
                return Ok(VisitOutcome::DryRunPreview);
            }
            if !self.modes.overwrite && target.exists() {
                self.reporter
                    .info(format!("{} already exists, skipping", target.display()));
                return Ok(VisitOutcome::SkippedExisting);
            }
            if target == *file {
                // Copying a file onto itself would truncate it
                return Ok(VisitOutcome::CopiedVerbatim);
            }
            self.create_parent(&target)?;
            fs::copy(file, &target).map_err(|source| EngineError::Copy {
                from: file.to_path_buf(),
                to: target.clone(),
                source,
            })?;
            return Ok(VisitOutcome::CopiedVerbatim);
        }

        let original = fs::read_to_string(file).map_err(|source| {
            self.reporter
                .error(format!("Error reading {} ({source})", file.display()));
            EngineError::Read {
                path: file.to_path_buf(),
                source,
            }
        })?;
        let content = self.rules.apply(name, &original);
        if content == original {
            self.reporter
                .trace(format!("No replacement in {}", file.display()));
        } else {
            self.reporter
                .info(format!("Replacements done in {}", file.display()));
        }

        if self.modes.dry_run {
            self.reporter.info(format!(
                "[dry-run] Writing {} to {}:\n{content}",
                file.display(),
                target.display()
            ));
            return Ok(VisitOutcome::DryRunPreview);
        }
        // The computed content is intentionally discarded on skip; the
        // replacement diagnostics above fire either way
        if !self.modes.overwrite && target.exists() {
            self.reporter
                .info(format!("{} already exists, skipping", target.display()));
            return Ok(VisitOutcome::SkippedExisting);
        }
        if target == *file {
            fs::write(file, &content).map_err(|source| EngineError::Write {
                path: file.to_path_buf(),
                source,
            })?;
        } else {
            self.create_parent(&target)?;
            fs::write(&target, &content).map_err(|source| EngineError::Write {
                path: target.clone(),
                source,
            })?;
        }
        Ok(VisitOutcome::Written)
    }

    /// Compute the destination path for a source file, rewriting the
    /// relative path through the pipeline when folder renaming is active.
    fn target_path(&self, file: &Path) -> PathBuf {
        let rel = file.strip_prefix(&self.from).unwrap_or(file);
        if self.modes.rename_folders {
            let rel_str = rel.to_string_lossy();
            // Path rewriting uses the empty filename key: only unfiltered
            // rules fire
            let rewritten = self.rules.apply("", &rel_str);
            if rewritten != rel_str {
                self.reporter
                    .trace(format!("Renaming {rel_str} to {rewritten}"));
            }
            self.to.join(rewritten)
        } else {
            self.to.join(rel)
        }
    }

    /// After a directory's subtree is fully processed: if an in-place
    /// folder-renaming run moved its contents to a renamed path, delete the
    /// stale original, files first, then the directory itself.
    fn reconcile_dir(&self, dir: &Path, summary: &mut RunSummary) -> Result<(), EngineError> {
        if !(self.modes.rename_folders && self.in_place) {
            return Ok(());
        }
        let rel = dir
            .strip_prefix(&self.from)
            .unwrap_or(dir)
            .to_string_lossy()
            .into_owned();
        if rel.is_empty() {
            // The source root itself is never pruned
            return Ok(());
        }
        let rewritten = self.rules.apply("", &rel);
        if rewritten == rel {
            self.reporter
                .trace(format!("Keeping folder {}", dir.display()));
            return Ok(());
        }
        self.reporter
            .trace(format!("Renamed folder {rel} to {rewritten}, pruning the original"));
        if self.modes.dry_run {
            self.reporter
                .info(format!("[dry-run] Deleting {}", dir.display()));
            return Ok(());
        }
        fs::remove_dir_all(dir).map_err(|source| EngineError::Delete {
            path: dir.to_path_buf(),
            source,
        })?;
        summary.stale_dirs_removed += 1;
        Ok(())
    }

    fn create_parent(&self, target: &Path) -> Result<(), EngineError> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| EngineError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

/// The final path segment as a string; empty when the path has none.
fn bare_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
