use tracing::{debug, trace};

use super::{CarvedRecord, Signature, SlotSize, builtin_signatures};
use crate::buffer::ByteBuffer;
use crate::buffer::layout::carve::LOOKAHEAD;

/// Scan `buffer` for embedded sub-resources using the built-in signatures
pub fn carve(buffer: &ByteBuffer) -> Vec<CarvedRecord> {
    SignatureCarver::new(builtin_signatures()).scan(buffer)
}

/// Linear signature scan over a byte buffer.
///
/// At each offset the signatures are tried in order and the first hit wins.
/// A hit with a known size moves the cursor past the carved region so nested
/// signatures are not reported. Unknown-size hits only consume one byte, which
/// can report the same resource more than once; every raw hit is kept.
#[derive(Debug, Clone, Copy)]
pub struct SignatureCarver<'a> {
    signatures: &'a [Signature],
}

impl<'a> SignatureCarver<'a> {
    pub fn new(signatures: &'a [Signature]) -> Self {
        Self { signatures }
    }

    pub fn scan(&self, buffer: &ByteBuffer) -> Vec<CarvedRecord> {
        let bytes = buffer.as_slice();
        let end = bytes.len().saturating_sub(LOOKAHEAD);
        let mut records = Vec::new();
        let mut offset = 0;

        while offset < end {
            let tail = &bytes[offset..];
            let hit = self
                .signatures
                .iter()
                .find_map(|signature| (signature.probe)(tail).map(|size| (signature, size)));

            let Some((signature, size)) = hit else {
                offset += 1;
                continue;
            };

            trace!(
                "Signature '{}' at 0x{:X} (size: {})",
                signature.name, offset, size
            );
            records.push(CarvedRecord::new(
                records.len(),
                offset,
                size,
                signature.kind,
                buffer.generation(),
            ));

            offset += match size {
                SlotSize::Known(size) => size.max(1),
                SlotSize::Unknown => 1,
            };
        }

        debug!(
            "Carved {} regions from {} bytes",
            records.len(),
            bytes.len()
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carve::AssetKind;

    /// Signature, IHDR chunk, IEND chunk: the smallest well-formed PNG layout
    fn minimal_png() -> Vec<u8> {
        let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        png.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D]);
        png.extend_from_slice(b"IHDR");
        png.extend_from_slice(&[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0]);
        png.extend_from_slice(&[0x1F, 0x15, 0xC4, 0x89]);
        png.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        png.extend_from_slice(b"IEND");
        png.extend_from_slice(&[0xAE, 0x42, 0x60, 0x82]);
        png
    }

    #[test]
    fn test_json_at_start() {
        let mut bytes = br#"{"a":1}"#.to_vec();
        bytes.resize(32, 0);
        let records = carve(&ByteBuffer::new(bytes));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 0);
        assert_eq!(records[0].size, SlotSize::Known(7));
        assert_eq!(records[0].kind, AssetKind::Json);
        assert_eq!(records[0].display_name, "File_0.json");
    }

    #[test]
    fn test_minimal_png_is_whole_buffer() {
        let png = minimal_png();
        let len = png.len();
        let records = carve(&ByteBuffer::new(png));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 0);
        assert_eq!(records[0].size, SlotSize::Known(len));
        assert_eq!(records[0].kind, AssetKind::Image);
    }

    #[test]
    fn test_png_size_from_iend_position() {
        let mut bytes = vec![0u8; 1024];
        bytes[100..104].copy_from_slice(&[0x89, 0x50, 0x4E, 0x47]);
        bytes[500..504].copy_from_slice(b"IEND");
        let records = carve(&ByteBuffer::new(bytes.clone()));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offset, 100);
        assert_eq!(records[0].size, SlotSize::Known(500 - 100 + 8));

        bytes[500..504].fill(0);
        bytes[600..604].copy_from_slice(b"IEND");
        let records = carve(&ByteBuffer::new(bytes));
        assert_eq!(records[0].size, SlotSize::Known(508));
    }

    #[test]
    fn test_known_size_skips_nested_signatures() {
        let mut bytes = br#"{"inner":"OggS","x":{"y":1}}"#.to_vec();
        bytes.extend_from_slice(&[0; 4]);
        bytes.extend_from_slice(b"OggS");
        bytes.resize(64, 0);
        let records = carve(&ByteBuffer::new(bytes));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, AssetKind::Json);
        assert_eq!(records[1].kind, AssetKind::Audio);
        assert_eq!(records[1].offset, 32);
        assert_eq!(records[1].id, 1);
        assert_eq!(records[1].display_name, "File_1.ogg");
    }

    #[test]
    fn test_unknown_size_hits_are_not_merged() {
        let mut bytes = b"OggSOggS".to_vec();
        bytes.resize(40, 0);
        bytes[20..27].copy_from_slice(b"UnityFS");
        let records = carve(&ByteBuffer::new(bytes));

        let found: Vec<(usize, AssetKind)> = records.iter().map(|r| (r.offset, r.kind)).collect();
        assert_eq!(
            found,
            vec![
                (0, AssetKind::Audio),
                (4, AssetKind::Audio),
                (20, AssetKind::Archive)
            ]
        );
        assert!(records.iter().all(|r| r.size.is_unknown()));
    }

    #[test]
    fn test_lookahead_margin() {
        // Signature inside the last 16 bytes is never probed
        let mut bytes = vec![0u8; 20];
        bytes[4..8].copy_from_slice(b"OggS");
        assert!(carve(&ByteBuffer::new(bytes)).is_empty());

        assert!(carve(&ByteBuffer::new(b"OggS".to_vec())).is_empty());
        assert!(carve(&ByteBuffer::new(Vec::new())).is_empty());
    }

    #[test]
    fn test_carve_is_idempotent() {
        let mut bytes = minimal_png();
        bytes.extend_from_slice(b"OggS");
        bytes.extend_from_slice(br#"{"k":"v"}"#);
        bytes.resize(bytes.len() + 32, 0);
        let buffer = ByteBuffer::new(bytes);
        assert_eq!(carve(&buffer), carve(&buffer));
    }
}
