//! Structure builder: make sure every layout entry exists under the base path.
//!
//! Each entry is created with `create_dir_all`, so missing parents come along
//! in a single call. Existing entries are left alone; nothing is ever deleted.

use crate::layout::FolderLayout;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What to do after an entry fails to be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Keep going and report every failure.
    #[default]
    Continue,
    /// Stop at the first failure; later entries are not attempted.
    Halt,
}

#[derive(Debug)]
pub enum BuildOutcome {
    Created,
    AlreadyExists,
    Failed(io::Error),
}

impl BuildOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, BuildOutcome::Failed(_))
    }
}

#[derive(Debug)]
pub struct BuildEntry {
    pub path: PathBuf,
    pub outcome: BuildOutcome,
}

/// Per-entry results, in layout order. With [`ErrorPolicy::Halt`] the list
/// ends at the first failure.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub entries: Vec<BuildEntry>,
}

impl BuildReport {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, BuildOutcome::Created))
    }

    pub fn already_existed(&self) -> usize {
        self.count(|o| matches!(o, BuildOutcome::AlreadyExists))
    }

    pub fn failed(&self) -> usize {
        self.count(BuildOutcome::is_failure)
    }

    fn count(&self, pred: impl Fn(&BuildOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Ensure a single directory exists.
pub fn ensure_dir(path: &Path) -> BuildOutcome {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => return BuildOutcome::AlreadyExists,
        // A symlink to a directory counts as present; anything else is in the way.
        Ok(_) if path.is_dir() => return BuildOutcome::AlreadyExists,
        Ok(_) => {
            return BuildOutcome::Failed(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "exists but is not a directory",
            ))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return BuildOutcome::Failed(e),
    }
    match fs::create_dir_all(path) {
        Ok(()) => BuildOutcome::Created,
        Err(e) => BuildOutcome::Failed(e),
    }
}

/// Create every entry of `layout` under `base`, in order.
pub fn build(base: &Path, layout: &FolderLayout, policy: ErrorPolicy) -> BuildReport {
    let mut report = BuildReport::default();
    for path in layout.resolve(base) {
        let outcome = ensure_dir(&path);
        match &outcome {
            BuildOutcome::Created => tracing::info!(path = %path.display(), "created directory"),
            BuildOutcome::AlreadyExists => {
                tracing::debug!(path = %path.display(), "directory already exists")
            }
            BuildOutcome::Failed(e) => {
                tracing::warn!(path = %path.display(), "failed to create directory: {}", e)
            }
        }
        let halt = outcome.is_failure() && policy == ErrorPolicy::Halt;
        report.entries.push(BuildEntry { path, outcome });
        if halt {
            tracing::warn!("halting after first failure");
            break;
        }
    }
    report
}
