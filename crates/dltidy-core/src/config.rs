use crate::builder::ErrorPolicy;
use crate::home::{DEFAULT_DOWNLOADS_DIR, DEFAULT_HOME_VAR};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("locate config: {0}")]
    Locate(io::Error),
}

/// Global configuration loaded from `~/.config/dltidy/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TidyConfig {
    /// Environment variable holding the home directory.
    pub home_var: String,
    /// Folder under the home directory that both operations work in.
    pub downloads_dir_name: String,
    /// Stop building at the first entry that cannot be created.
    pub halt_on_error: bool,
}

impl Default for TidyConfig {
    fn default() -> Self {
        Self {
            home_var: DEFAULT_HOME_VAR.to_string(),
            downloads_dir_name: DEFAULT_DOWNLOADS_DIR.to_string(),
            halt_on_error: false,
        }
    }
}

impl TidyConfig {
    pub fn error_policy(&self) -> ErrorPolicy {
        if self.halt_on_error {
            ErrorPolicy::Halt
        } else {
            ErrorPolicy::Continue
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load configuration from `path`. A missing file yields the defaults; the
/// file is never created here.
pub fn load_from(path: &Path) -> Result<TidyConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TidyConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load from the standard location; defaults if there is no config file.
pub fn load() -> Result<TidyConfig, ConfigError> {
    match paths::find_config_file() {
        Some(path) => load_from(&path),
        None => Ok(TidyConfig::default()),
    }
}

/// Write the default config to `path` unless a file already exists there.
/// Returns `true` if a file was written.
pub fn write_default_to(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    let toml = TidyConfig::default().to_toml()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, toml).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("created default config at {}", path.display());
    Ok(true)
}

/// [`write_default_to`] at the standard location; returns the path used.
pub fn write_default() -> Result<(PathBuf, bool), ConfigError> {
    let path = paths::place_config_file().map_err(ConfigError::Locate)?;
    let written = write_default_to(&path)?;
    Ok((path, written))
}
