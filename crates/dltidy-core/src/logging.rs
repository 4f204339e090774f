//! Logging init: append to a file under the XDG state dir, or fall back to stderr.

use crate::paths;
use anyhow::Result;
use std::fs;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,dltidy=debug,dltidy_core=debug";

fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to `~/.local/state/dltidy/dltidy.log`.
///
/// Errors (no state dir, file not writable, subscriber already set) are
/// returned so the caller can switch to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let log_file_path = paths::place_log_file()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter_or(DEFAULT_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!("dltidy logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Warnings only by default; the console already shows one line per action.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter_or("warn"))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
