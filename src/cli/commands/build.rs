//! `dltidy build` – create the folder layout under the base path.

use crate::cli::console::Console;
use anyhow::Result;
use dltidy_core::builder::{self, BuildOutcome, BuildReport, ErrorPolicy};
use dltidy_core::layout::FolderLayout;
use std::io::Write;
use std::path::Path;

pub fn run_build<O: Write, E: Write>(
    console: &mut Console<O, E>,
    base: &Path,
    layout: &FolderLayout,
    policy: ErrorPolicy,
) -> Result<BuildReport> {
    let report = builder::build(base, layout, policy);
    for entry in &report.entries {
        let path = entry.path.display();
        match &entry.outcome {
            BuildOutcome::Created => writeln!(console.out, "Creating directory: {path}")?,
            BuildOutcome::AlreadyExists => {
                writeln!(console.out, "Directory already exists: {path}")?
            }
            BuildOutcome::Failed(e) => {
                writeln!(console.err, "Failed to create directory: {path}. Error: {e}")?
            }
        }
    }
    writeln!(console.out, "Folder structure creation completed.")?;
    Ok(report)
}
