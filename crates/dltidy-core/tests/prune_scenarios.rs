//! Integration test: scan + prune over real directory trees.
//!
//! Builds small trees in a temp dir and checks that one pass only removes
//! directories that were empty when scanned.

use dltidy_core::prune::{scan_and_prune, PruneMode, PruneOutcome};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn removed_paths(entries: &[dltidy_core::prune::PruneEntry]) -> BTreeSet<PathBuf> {
    entries
        .iter()
        .filter(|e| matches!(e.outcome, PruneOutcome::Removed))
        .map(|e| e.path.clone())
        .collect()
}

fn seed(base: &Path) {
    fs::create_dir(base.join("A")).unwrap();
    fs::create_dir(base.join("B")).unwrap();
    fs::write(base.join("B").join("x.txt"), b"x").unwrap();
    fs::create_dir_all(base.join("C").join("D")).unwrap();
}

#[test]
fn first_pass_removes_only_leaf_empty_dirs() {
    let dir = tempdir().unwrap();
    let base = dir.path();
    seed(base);

    let (scanned, pruned) = scan_and_prune(base, PruneMode::Delete);
    assert!(scanned.errors.is_empty());

    let expected: BTreeSet<PathBuf> = [base.join("A"), base.join("C").join("D")]
        .into_iter()
        .collect();
    assert_eq!(removed_paths(&pruned.entries), expected);
    assert_eq!(pruned.failed(), 0);

    assert!(!base.join("A").exists());
    assert!(base.join("B").join("x.txt").is_file());
    assert!(base.join("C").is_dir(), "C only became empty during this pass");
}

#[test]
fn second_pass_removes_newly_empty_parent() {
    let dir = tempdir().unwrap();
    let base = dir.path();
    seed(base);

    scan_and_prune(base, PruneMode::Delete);
    let (_, pruned) = scan_and_prune(base, PruneMode::Delete);

    let expected: BTreeSet<PathBuf> = [base.join("C")].into_iter().collect();
    assert_eq!(removed_paths(&pruned.entries), expected);
    assert!(!base.join("C").exists());
    assert!(base.join("B").is_dir());
    assert!(base.is_dir(), "base path itself is never removed");
}

#[test]
fn empty_base_is_never_removed() {
    let dir = tempdir().unwrap();
    let (scanned, pruned) = scan_and_prune(dir.path(), PruneMode::Delete);
    assert!(scanned.empty_dirs.is_empty());
    assert!(pruned.entries.is_empty());
    assert!(dir.path().is_dir());
}

#[test]
fn dry_run_changes_nothing() {
    let dir = tempdir().unwrap();
    let base = dir.path();
    seed(base);

    let (_, pruned) = scan_and_prune(base, PruneMode::DryRun);
    assert_eq!(pruned.removed(), 2);
    assert!(base.join("A").is_dir());
    assert!(base.join("C").join("D").is_dir());
}
