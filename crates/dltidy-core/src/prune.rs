//! Empty-folder pruner.
//!
//! Every candidate from a scan is re-checked right before removal; anything
//! that vanished or gained content in the meantime is skipped. Removal is
//! non-recursive, so a non-empty directory can never be deleted here.

use crate::fs_util::{dir_state, DirState};
use crate::scan;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneMode {
    #[default]
    Delete,
    /// Re-check candidates but leave them in place.
    DryRun,
}

/// Why a candidate was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Vanished,
    NoLongerEmpty,
    NotADirectory,
}

#[derive(Debug)]
pub enum PruneOutcome {
    Removed,
    WouldRemove,
    Skipped(SkipReason),
    Failed(io::Error),
}

#[derive(Debug)]
pub struct PruneEntry {
    pub path: PathBuf,
    pub outcome: PruneOutcome,
}

#[derive(Debug, Default)]
pub struct PruneReport {
    pub entries: Vec<PruneEntry>,
}

impl PruneReport {
    pub fn removed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PruneOutcome::Removed | PruneOutcome::WouldRemove))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PruneOutcome::Skipped(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, PruneOutcome::Failed(_)))
            .count()
    }
}

/// Re-check and remove one candidate.
pub fn prune_one(path: &Path, mode: PruneMode) -> PruneOutcome {
    match dir_state(path) {
        Ok(DirState::Empty) => {}
        Ok(DirState::Missing) => return PruneOutcome::Skipped(SkipReason::Vanished),
        Ok(DirState::NotEmpty) => return PruneOutcome::Skipped(SkipReason::NoLongerEmpty),
        Ok(DirState::NotADirectory) => return PruneOutcome::Skipped(SkipReason::NotADirectory),
        Err(e) => return PruneOutcome::Failed(e),
    }
    if mode == PruneMode::DryRun {
        return PruneOutcome::WouldRemove;
    }
    match fs::remove_dir(path) {
        Ok(()) => PruneOutcome::Removed,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            PruneOutcome::Skipped(SkipReason::Vanished)
        }
        Err(e) => PruneOutcome::Failed(e),
    }
}

/// Process every candidate in order. Failures never stop the loop.
pub fn prune(candidates: &[PathBuf], mode: PruneMode) -> PruneReport {
    let mut report = PruneReport::default();
    for path in candidates {
        let outcome = prune_one(path, mode);
        match &outcome {
            PruneOutcome::Removed => tracing::info!(path = %path.display(), "removed empty directory"),
            PruneOutcome::WouldRemove => {
                tracing::info!(path = %path.display(), "dry run: would remove empty directory")
            }
            PruneOutcome::Skipped(reason) => {
                tracing::debug!(path = %path.display(), ?reason, "skipped candidate")
            }
            PruneOutcome::Failed(e) => {
                tracing::warn!(path = %path.display(), "failed to remove directory: {}", e)
            }
        }
        report.entries.push(PruneEntry {
            path: path.clone(),
            outcome,
        });
    }
    report
}

/// One scan followed by one pruning pass over its results.
///
/// Directories that only become empty because of this pass are left for the
/// next run.
pub fn scan_and_prune(base: &Path, mode: PruneMode) -> (scan::ScanReport, PruneReport) {
    let scanned = scan::collect_empty_dirs(base);
    let pruned = prune(&scanned.empty_dirs, mode);
    (scanned, pruned)
}
