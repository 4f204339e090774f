//! `dltidy prune` – remove directories under the base path that are empty.

use crate::cli::console::Console;
use anyhow::Result;
use dltidy_core::prune::{self, PruneMode, PruneOutcome, PruneReport};
use std::io::Write;
use std::path::Path;

/// One scan and one removal pass. Scan errors and failed removals are printed
/// and never stop the run; race-skipped candidates are silent.
pub fn run_prune<O: Write, E: Write>(
    console: &mut Console<O, E>,
    base: &Path,
    mode: PruneMode,
) -> Result<PruneReport> {
    let (scanned, report) = prune::scan_and_prune(base, mode);
    for err in &scanned.errors {
        writeln!(console.err, "Filesystem error during iteration: {err}")?;
    }

    for entry in &report.entries {
        let path = entry.path.display();
        match &entry.outcome {
            PruneOutcome::Removed => writeln!(console.out, "Removed empty directory: {path}")?,
            PruneOutcome::WouldRemove => {
                writeln!(console.out, "Would remove empty directory: {path}")?
            }
            PruneOutcome::Skipped(_) => {}
            PruneOutcome::Failed(e) => {
                writeln!(console.err, "Failed to remove directory: {path}. Error: {e}")?
            }
        }
    }
    writeln!(console.out, "Empty folder removal completed.")?;
    Ok(report)
}
