//! Per-file visit outcomes and the aggregated run summary

use serde::Serialize;

/// The decision taken for one visited file. Deterministic given the entry
/// name, the predicate sets, the destination state and the mode flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Name matched an exclusion predicate; nothing was done
    SkippedExcluded,
    /// Filtering-excluded file copied byte-for-byte
    CopiedVerbatim,
    /// Target existed and overwrite was disabled
    SkippedExisting,
    /// Content written to the target path
    Written,
    /// Dry run reported the intended action without I/O
    DryRunPreview,
}

/// Counts per visit outcome, plus pruning statistics. Serialized as the
/// `--json` result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub written: usize,
    pub copied: usize,
    pub previewed: usize,
    pub skipped_existing: usize,
    pub skipped_excluded: usize,
    /// Directories pruned from traversal by exclusion predicates
    pub excluded_dirs: usize,
    /// Renamed directories whose stale originals were deleted
    pub stale_dirs_removed: usize,
}

impl RunSummary {
    pub(crate) fn record(&mut self, outcome: VisitOutcome) {
        match outcome {
            VisitOutcome::SkippedExcluded => self.skipped_excluded += 1,
            VisitOutcome::CopiedVerbatim => self.copied += 1,
            VisitOutcome::SkippedExisting => self.skipped_existing += 1,
            VisitOutcome::Written => self.written += 1,
            VisitOutcome::DryRunPreview => self.previewed += 1,
        }
    }

    /// Total number of files that reached a per-file decision
    #[must_use]
    pub fn total_visited(&self) -> usize {
        self.written + self.copied + self.previewed + self.skipped_existing + self.skipped_excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_maps_outcomes_to_counts() {
        let mut summary = RunSummary::default();
        summary.record(VisitOutcome::Written);
        summary.record(VisitOutcome::Written);
        summary.record(VisitOutcome::CopiedVerbatim);
        summary.record(VisitOutcome::SkippedExisting);
        summary.record(VisitOutcome::SkippedExcluded);
        summary.record(VisitOutcome::DryRunPreview);

        assert_eq!(summary.written, 2);
        assert_eq!(summary.copied, 1);
        assert_eq!(summary.skipped_existing, 1);
        assert_eq!(summary.skipped_excluded, 1);
        assert_eq!(summary.previewed, 1);
        assert_eq!(summary.total_visited(), 6);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = RunSummary {
            written: 1,
            ..Default::default()
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["written"], 1);
        assert_eq!(json["stale_dirs_removed"], 0);
    }
}
