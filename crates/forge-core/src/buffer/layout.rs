//! Byte layout constants shared by the scanners and patchers
//!
//! This module centralizes the fixed sizes the heuristics rely on.
//! Constants are organized by the component that uses them.

/// Constants for the signature carver
pub mod carve {
    /// Bytes kept in reserve at the end of the buffer so every probe stays in bounds
    pub const LOOKAHEAD: usize = 16;

    /// Maximum distance (from the opening brace) scanned while balancing a JSON object
    pub const JSON_WINDOW: usize = 50_000;

    /// PNG magic prefix; only the first 4 of the 8 signature bytes are required
    pub const PNG_PREFIX: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
    /// Full PNG signature length, where the IEND search starts
    pub const PNG_SIGNATURE_LEN: usize = 8;
    /// IEND chunk type code
    pub const PNG_IEND: &[u8; 4] = b"IEND";
    /// Chunk type code (4) + CRC trailer (4)
    pub const PNG_IEND_TRAILER: usize = 8;

    pub const UNITY_FS_TAG: &[u8; 7] = b"UnityFS";
    pub const OGG_TAG: &[u8; 4] = b"OggS";
}

/// Constants for sub-file extraction
pub mod extract {
    /// Cap for regions whose true size is unknown (5 MiB)
    pub const UNKNOWN_SIZE_CAP: usize = 5 * 1024 * 1024;
}

/// Constants for text scanning
pub mod text {
    /// Default minimum run length in bytes
    pub const DEFAULT_MIN_LENGTH: usize = 4;

    /// Default charset label for decoding and re-encoding
    pub const DEFAULT_CHARSET: &str = "utf-8";

    /// Lowest printable ASCII byte (space)
    pub const PRINTABLE_MIN: u8 = 0x20;
    /// Highest printable ASCII byte (`~`)
    pub const PRINTABLE_MAX: u8 = 0x7E;
}

/// Output naming conventions
pub mod naming {
    pub const MODDED_PREFIX: &str = "MODDED_";
    pub const MEMORY_SUFFIX: &str = "_translation.json";
}
