//! Repack command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use forge_core::{Session, TextOptions};
use owo_colors::OwoColorize;

/// Apply a translation memory and write the patched file
pub fn run(
    file: &Path,
    memory: &Path,
    options: &TextOptions,
    output: Option<PathBuf>,
    output_dir: &Path,
) -> Result<()> {
    let mut session = Session::open(file)?;
    session.scan_strings(options)?;

    let summary = session.import_memory(&fs::read_to_string(memory)?)?;
    eprintln!(
        "Imported {} entries ({} with translations) from {}",
        summary.entries,
        summary.merged,
        memory.display()
    );

    let (patched, report) = session.repack(options)?;
    let path = output.unwrap_or_else(|| output_dir.join(session.modded_name()));
    fs::write(&path, patched.as_slice())?;

    eprintln!(
        "Repacked to {}: {} applied, {} rejected, {} unmatched",
        path.display(),
        report.applied.green(),
        report.rejected.red(),
        report.unmatched.yellow()
    );
    for offset in &report.rejected_offsets {
        eprintln!(
            "  too long: {:#X} (max {} bytes)",
            offset,
            session
                .strings()
                .iter()
                .find(|record| record.offset == *offset)
                .map_or(0, |record| record.length)
        );
    }
    for offset in &report.unmatched_offsets {
        eprintln!("  no string at {:#X} in this file", offset);
    }

    Ok(())
}
