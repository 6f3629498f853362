//! Hexdump command implementation.
//!
//! Displays raw file bytes in traditional hexdump format, useful for looking
//! at the neighbourhood of a string or carved region before patching it.
//!
//! # Output Format
//!
//! ```text
//! 00000000: 48 65 6C 6C 6F 20 57 6F  72 6C 64 00 00 00 00 00  |Hello World.....|
//! ```

use std::path::Path;

use anyhow::Result;
use forge_core::ByteBuffer;

/// Run the hexdump command
pub fn run(file: &Path, offset: usize, size: usize) -> Result<()> {
    let buffer = ByteBuffer::new(std::fs::read(file)?);
    let start = offset.min(buffer.len());
    let len = size.min(buffer.len() - start);
    let bytes = buffer.region(start, len)?;

    println!(
        "Hexdump of {} at {:#X} ({} of {} bytes):",
        file.display(),
        start,
        len,
        buffer.len()
    );
    println!();

    for (i, chunk) in bytes.chunks(16).enumerate() {
        println!("{}", format_row(start + i * 16, chunk));
    }

    Ok(())
}

/// Format up to 16 bytes as `OFFSET: HEX  |ASCII|`
pub fn format_row(offset: usize, chunk: &[u8]) -> String {
    let mut line = format!("{:08X}: ", offset);

    for j in 0..16 {
        if j == 8 {
            line.push(' ');
        }
        match chunk.get(j) {
            Some(byte) => line.push_str(&format!("{:02X} ", byte)),
            None => line.push_str("   "),
        }
    }

    line.push_str(" |");
    for byte in chunk {
        if (0x20..0x7F).contains(byte) {
            line.push(*byte as char);
        } else {
            line.push('.');
        }
    }
    for _ in chunk.len()..16 {
        line.push(' ');
    }
    line.push('|');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_row() {
        let row = format_row(0, b"Hello World\x00\x00\x00\x00\x00");
        assert_eq!(
            row,
            "00000000: 48 65 6C 6C 6F 20 57 6F  72 6C 64 00 00 00 00 00  |Hello World.....|"
        );
    }

    #[test]
    fn test_format_partial_row_is_padded() {
        let row = format_row(0x1F0, &[0x89, b'P', b'N', b'G']);
        assert!(row.starts_with("000001F0: 89 50 4E 47 "));
        assert!(row.ends_with("|.PNG            |"));
        assert_eq!(row.len(), format_row(0, &[0; 16]).len());
    }
}
