//! Carve command implementation.

use std::path::Path;

use anyhow::Result;
use forge_core::Session;

/// List the sub-files found by signature scanning
pub fn run(file: &Path, json: bool) -> Result<()> {
    let mut session = Session::open(file)?;
    session.carve();
    let records = session.carved();

    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    eprintln!("{}: {} candidate sub-files", session.name(), records.len());
    for record in records {
        println!(
            "[{}] 0x{:08X} {:>8} {:<8} {}",
            record.id,
            record.offset,
            record.size.to_string(),
            record.kind.name(),
            record.display_name
        );
    }

    Ok(())
}
