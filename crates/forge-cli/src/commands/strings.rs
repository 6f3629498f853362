//! Strings command implementation.

use std::path::Path;

use anyhow::Result;
use forge_core::{Session, TextOptions, filter_strings};

/// List the printable strings of a file
pub fn run(file: &Path, options: &TextOptions, query: Option<&str>, json: bool) -> Result<()> {
    let mut session = Session::open(file)?;
    session.scan_strings(options)?;
    let records = filter_strings(
        session.strings(),
        session.translations(),
        query.unwrap_or_default(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    eprintln!(
        "{}: {} strings ({} shown, charset {}, min {} bytes)",
        session.name(),
        session.strings().len(),
        records.len(),
        options.charset,
        options.min_length
    );
    for record in records {
        println!(
            "[{}] 0x{:08X} max {:>4}B  {:?}",
            record.id, record.offset, record.length, record.original
        );
    }

    Ok(())
}
