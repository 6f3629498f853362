//! Session state and persisted operator data.
//!
//! - **Session**: owns the canonical buffer, pending edits and scan results
//! - **Translation memory**: JSON interchange document for string edits
//!
//! ## Output Names
//!
//! - Repacked file: `MODDED_{name}`
//! - Translation memory: `{name}_translation.json`
//! - Extracted regions use the record's display name, `File_{id}.{ext}`

mod memory;
mod session;

use crate::buffer::layout::naming::{MEMORY_SUFFIX, MODDED_PREFIX};

pub use memory::{ImportSummary, MemoryEntry, TranslationMemory, load_memory, save_memory};
pub use session::{ConfirmPrompt, Session};

pub fn modded_file_name(original: &str) -> String {
    format!("{}{}", MODDED_PREFIX, original)
}

pub fn memory_file_name(original: &str) -> String {
    format!("{}{}", original, MEMORY_SUFFIX)
}
