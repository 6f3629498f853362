//! Memory command implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use forge_core::{Session, TextOptions, save_memory};

/// Export a translation memory document for the file's strings
pub fn run(
    file: &Path,
    options: &TextOptions,
    output: Option<PathBuf>,
    output_dir: &Path,
) -> Result<()> {
    let mut session = Session::open(file)?;
    session.scan_strings(options)?;

    let memory = session.export_memory();
    let path = output.unwrap_or_else(|| output_dir.join(session.memory_name()));
    save_memory(&path, &memory)?;
    eprintln!(
        "Exported {} strings to {}",
        memory.len(),
        path.display()
    );

    Ok(())
}
