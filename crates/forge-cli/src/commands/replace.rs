//! Replace command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use forge_core::Session;
use tracing::info;

use crate::prompter::CliPrompter;

/// Overwrite a carved sub-file and write the patched file
pub fn run(
    file: &Path,
    id: usize,
    replacement: &Path,
    assume_yes: bool,
    output: Option<PathBuf>,
    output_dir: &Path,
) -> Result<()> {
    let mut session = Session::open(file)?;
    session.carve();
    let record = session
        .carved_record(id)
        .cloned()
        .ok_or_else(|| anyhow!("No carved record with id {} (see `forge carve`)", id))?;

    let data = fs::read(replacement)?;
    info!(
        "Replacing {} ({} bytes) with {} ({} bytes)",
        record.display_name,
        record.size,
        replacement.display(),
        data.len()
    );
    let outcome = session.replace_sub_file(&record, data, &CliPrompter { assume_yes })?;

    let path = output.unwrap_or_else(|| output_dir.join(session.modded_name()));
    fs::write(&path, session.buffer().as_slice())?;
    eprintln!(
        "Replaced {}: {} bytes written, {} zero-filled, {} dropped. Saved to {}",
        record.display_name,
        outcome.written,
        outcome.zero_filled,
        outcome.truncated,
        path.display()
    );

    Ok(())
}
