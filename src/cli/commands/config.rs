//! `dltidy config` – show the effective configuration, optionally writing the default file.

use anyhow::Result;
use dltidy_core::config::{self, TidyConfig};
use std::io::Write;

pub fn run_config<O: Write>(out: &mut O, cfg: &TidyConfig, write_default: bool) -> Result<()> {
    if write_default {
        let (path, written) = config::write_default()?;
        if written {
            writeln!(out, "Wrote default config to {}", path.display())?;
        } else {
            writeln!(out, "Config already exists at {}", path.display())?;
        }
    }
    write!(out, "{}", cfg.to_toml()?)?;
    Ok(())
}
