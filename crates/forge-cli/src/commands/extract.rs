//! Extract command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};
use forge_core::Session;
use owo_colors::OwoColorize;

/// Write one carved sub-file to `output_dir`
pub fn run(file: &Path, id: usize, output_dir: &Path) -> Result<()> {
    let mut session = Session::open(file)?;
    session.carve();
    let record = session
        .carved_record(id)
        .ok_or_else(|| anyhow!("No carved record with id {} (see `forge carve`)", id))?;

    let extraction = session.extract(record)?;
    if let Some(advisory) = extraction.advisory {
        eprintln!(
            "{} {} has no known size; wrote the first {} bytes (cap {} bytes), which is only an approximation.",
            "Warning:".yellow().bold(),
            record.display_name,
            advisory.returned,
            advisory.cap
        );
    }

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&extraction.file_name);
    fs::write(&path, &extraction.bytes)?;
    eprintln!(
        "Extracted {} ({} bytes) to {}",
        record.display_name,
        extraction.bytes.len(),
        path.display()
    );

    Ok(())
}
