//! CLI for dltidy.

mod commands;
mod console;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dltidy_core::builder::ErrorPolicy;
use dltidy_core::config::{self, TidyConfig};
use dltidy_core::home::{self, EnvHomeResolver, FixedHome, HomeError};
use dltidy_core::layout::FolderLayout;
use dltidy_core::logging;
use dltidy_core::prune::PruneMode;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use commands::{run_build, run_config, run_menu, run_prune};
use console::Console;

/// Top-level CLI for dltidy.
#[derive(Debug, Parser)]
#[command(name = "dltidy")]
#[command(about = "Build a fixed folder layout under Downloads, or prune its empty directories", long_about = None)]
pub struct Cli {
    /// Work in this directory instead of <home>/Downloads.
    #[arg(long, global = true, value_name = "PATH")]
    pub base_dir: Option<PathBuf>,

    /// Do not wait for Enter before exiting the menu.
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Without a subcommand the interactive menu is shown.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the interactive menu.
    Menu,

    /// Create the folder layout under the base path.
    Build {
        /// Stop at the first directory that cannot be created.
        #[arg(long)]
        halt_on_error: bool,
    },

    /// Remove directories under the base path that are currently empty (one pass).
    Prune {
        /// List what would be removed without deleting anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the effective configuration.
    Config {
        /// Write the default config file if none exists yet.
        #[arg(long)]
        write_default: bool,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    fn run(self) -> Result<()> {
        // Read-only: a missing config file is not created here.
        let cfg = config::load()?;
        let base_dir = self.base_dir.as_deref();
        let layout = FolderLayout::standard();

        match self.command.unwrap_or(CliCommand::Menu) {
            CliCommand::Config { write_default } => {
                start_logging();
                run_config(&mut io::stdout(), &cfg, write_default)?;
            }
            CliCommand::Build { halt_on_error } => {
                let (base, mut console) = open_session(base_dir, &cfg, start_logging)?;
                let policy = if halt_on_error {
                    ErrorPolicy::Halt
                } else {
                    cfg.error_policy()
                };
                run_build(&mut console, &base, &layout, policy)?;
            }
            CliCommand::Prune { dry_run } => {
                let (base, mut console) = open_session(base_dir, &cfg, start_logging)?;
                let mode = if dry_run {
                    PruneMode::DryRun
                } else {
                    PruneMode::Delete
                };
                run_prune(&mut console, &base, mode)?;
            }
            CliCommand::Menu => {
                let (base, mut console) = open_session(base_dir, &cfg, start_logging)?;
                let stdin = io::stdin();
                let mut input = stdin.lock();
                run_menu(
                    &mut input,
                    &mut console,
                    &base,
                    &layout,
                    cfg.error_policy(),
                    !self.no_pause,
                )?;
            }
        }

        Ok(())
    }
}

/// Resolve the base path, then start logging and announce the path.
/// `init_logs` (which creates the log file) only runs once the base path is known.
fn open_session(
    base_dir: Option<&Path>,
    cfg: &TidyConfig,
    init_logs: impl FnOnce(),
) -> Result<(PathBuf, Console<io::Stdout, io::Stderr>)> {
    let base = resolve_base(base_dir, cfg).context("could not resolve the download path")?;
    init_logs();
    tracing::debug!("loaded config: {:?}", cfg);

    let mut console = Console::stdio();
    writeln!(console.out, "Download path is: {}", base.display())?;
    Ok((base, console))
}

/// `--base-dir` is used as-is; otherwise `<$home_var>/<downloads_dir_name>`.
fn resolve_base(base_dir: Option<&Path>, cfg: &TidyConfig) -> Result<PathBuf, HomeError> {
    match base_dir {
        Some(dir) => home::downloads_dir(&FixedHome(dir.to_path_buf()), ""),
        None => home::downloads_dir(
            &EnvHomeResolver::new(cfg.home_var.as_str()),
            &cfg.downloads_dir_name,
        ),
    }
}

fn start_logging() {
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }
}

#[cfg(test)]
mod tests;
