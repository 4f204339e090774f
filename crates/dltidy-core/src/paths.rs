//! Where dltidy keeps its own files (config, log).
//!
//! Uses the XDG base directory spec via the `xdg` crate on Unix. Other
//! platforms have no config file and log to stderr.

use std::io;
use std::path::PathBuf;

pub const APP_PREFIX: &str = "dltidy";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE: &str = "dltidy.log";

/// Existing config file, if any. Never touches the filesystem beyond lookups.
#[cfg(unix)]
pub fn find_config_file() -> Option<PathBuf> {
    xdg_dirs().ok()?.find_config_file(CONFIG_FILE)
}

/// Path for a new config file; creates the config directory.
#[cfg(unix)]
pub fn place_config_file() -> io::Result<PathBuf> {
    xdg_dirs()?.place_config_file(CONFIG_FILE)
}

/// Path for the log file; creates the state directory.
#[cfg(unix)]
pub fn place_log_file() -> io::Result<PathBuf> {
    xdg_dirs()?.place_state_file(LOG_FILE)
}

#[cfg(unix)]
fn xdg_dirs() -> io::Result<xdg::BaseDirectories> {
    xdg::BaseDirectories::with_prefix(APP_PREFIX)
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, e.to_string()))
}

#[cfg(not(unix))]
pub fn find_config_file() -> Option<PathBuf> {
    None
}

#[cfg(not(unix))]
pub fn place_config_file() -> io::Result<PathBuf> {
    Err(unsupported())
}

#[cfg(not(unix))]
pub fn place_log_file() -> io::Result<PathBuf> {
    Err(unsupported())
}

#[cfg(not(unix))]
fn unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "no XDG base directories on this platform",
    )
}
