//! Small filesystem helpers shared by the scanner and the pruner.

use std::fs;
use std::io;
use std::path::Path;

/// True if `path` is a directory with no entries at all.
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    let mut entries = fs::read_dir(path)?;
    Ok(entries.next().is_none())
}

/// State of a deletion candidate when re-checked right before removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    /// Nothing at this path anymore.
    Missing,
    /// Something other than a real directory (file, symlink).
    NotADirectory,
    Empty,
    NotEmpty,
}

/// Inspect `path` without following symlinks.
pub fn dir_state(path: &Path) -> io::Result<DirState> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(DirState::Missing),
        Err(e) => return Err(e),
    };
    if !meta.is_dir() {
        return Ok(DirState::NotADirectory);
    }
    match is_empty_dir(path) {
        Ok(true) => Ok(DirState::Empty),
        Ok(false) => Ok(DirState::NotEmpty),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DirState::Missing),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_non_empty_dirs() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_empty_dir(dir.path()).unwrap());
        fs::write(dir.path().join("f.txt"), b"x").unwrap();
        assert!(!is_empty_dir(dir.path()).unwrap());
    }

    #[test]
    fn is_empty_dir_on_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = is_empty_dir(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn dir_state_classifies_paths() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty");
        let full = dir.path().join("full");
        let file = dir.path().join("file.txt");
        fs::create_dir(&empty).unwrap();
        fs::create_dir(&full).unwrap();
        fs::write(full.join("a"), b"a").unwrap();
        fs::write(&file, b"f").unwrap();

        assert_eq!(dir_state(&empty).unwrap(), DirState::Empty);
        assert_eq!(dir_state(&full).unwrap(), DirState::NotEmpty);
        assert_eq!(dir_state(&file).unwrap(), DirState::NotADirectory);
        assert_eq!(
            dir_state(&dir.path().join("gone")).unwrap(),
            DirState::Missing
        );
    }
}
