//! Empty-folder scan.
//!
//! Walks everything below the base path and records directories that have no
//! entries at the moment they are visited. The check is shallow: a directory
//! holding only empty subdirectories is not itself empty.

use crate::fs_util::is_empty_dir;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A non-fatal problem hit while walking. The affected entry is skipped.
#[derive(Debug)]
pub struct ScanError {
    pub path: Option<PathBuf>,
    pub source: std::io::Error,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(p) => write!(f, "{}: {}", p.display(), self.source),
            None => write!(f, "{}", self.source),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        let source = match err.into_io_error() {
            Some(io) => io,
            None => std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected"),
        };
        Self { path, source }
    }
}

#[derive(Debug, Default)]
pub struct ScanReport {
    /// Directories found empty, in walk order.
    pub empty_dirs: Vec<PathBuf>,
    pub errors: Vec<ScanError>,
}

/// Collect every empty directory strictly below `base`.
///
/// Symlinks are not followed and are never reported.
pub fn collect_empty_dirs(base: &Path) -> ScanReport {
    let mut report = ScanReport::default();
    let mut walker = WalkDir::new(base).min_depth(1).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let err = ScanError::from(err);
                tracing::warn!("scan error: {}", err);
                report.errors.push(err);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        match is_empty_dir(entry.path()) {
            Ok(true) => {
                tracing::debug!(path = %entry.path().display(), "found empty directory");
                report.empty_dirs.push(entry.into_path());
            }
            Ok(false) => {}
            Err(source) => {
                // Already reported; walkdir would fail on the same read_dir.
                walker.skip_current_dir();
                let err = ScanError {
                    path: Some(entry.into_path()),
                    source,
                };
                tracing::warn!("scan error: {}", err);
                report.errors.push(err);
            }
        }
    }

    tracing::info!(
        base = %base.display(),
        empty = report.empty_dirs.len(),
        errors = report.errors.len(),
        "scan finished"
    );
    report
}
