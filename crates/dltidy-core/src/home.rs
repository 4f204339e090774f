//! Base path resolution.
//!
//! The base path is `<home>/<downloads dir name>`. Where `<home>` comes from is
//! behind the [`HomeResolver`] trait so the builder and pruner never read the
//! environment themselves.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the user's home directory on this platform.
#[cfg(windows)]
pub const DEFAULT_HOME_VAR: &str = "USERPROFILE";
#[cfg(not(windows))]
pub const DEFAULT_HOME_VAR: &str = "HOME";

/// Default name of the downloads folder under the home directory.
pub const DEFAULT_DOWNLOADS_DIR: &str = "Downloads";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HomeError {
    #[error("{var} environment variable not found")]
    Missing { var: String },
    #[error("{var} environment variable is empty")]
    Empty { var: String },
}

/// Something that can tell us where the user's home directory is.
pub trait HomeResolver {
    fn home_dir(&self) -> Result<PathBuf, HomeError>;
}

/// Reads a single environment variable.
#[derive(Debug, Clone)]
pub struct EnvHomeResolver {
    var: String,
}

impl EnvHomeResolver {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    fn resolve_value(&self, value: Option<OsString>) -> Result<PathBuf, HomeError> {
        match value {
            None => Err(HomeError::Missing {
                var: self.var.clone(),
            }),
            Some(v) if v.is_empty() => Err(HomeError::Empty {
                var: self.var.clone(),
            }),
            Some(v) => Ok(PathBuf::from(v)),
        }
    }
}

impl Default for EnvHomeResolver {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_VAR)
    }
}

impl HomeResolver for EnvHomeResolver {
    fn home_dir(&self) -> Result<PathBuf, HomeError> {
        self.resolve_value(std::env::var_os(&self.var))
    }
}

/// Always returns the same directory. `--base-dir` resolves through this
/// with an empty downloads folder name, so the given path is the base.
#[derive(Debug, Clone)]
pub struct FixedHome(pub PathBuf);

impl HomeResolver for FixedHome {
    fn home_dir(&self) -> Result<PathBuf, HomeError> {
        Ok(self.0.clone())
    }
}

/// `<home>/<downloads_dir>` for the given resolver.
pub fn downloads_dir(
    resolver: &dyn HomeResolver,
    downloads_dir: &str,
) -> Result<PathBuf, HomeError> {
    let home = resolver.home_dir()?;
    Ok(join_native(&home, downloads_dir))
}

fn join_native(home: &Path, rel: &str) -> PathBuf {
    let mut p = home.to_path_buf();
    for part in rel.split(['/', '\\']).filter(|s| !s.is_empty()) {
        p.push(part);
    }
    p
}
