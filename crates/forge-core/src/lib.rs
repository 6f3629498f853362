//! # forge-core
//!
//! Core library for the Forge asset modding toolkit.
//!
//! This crate provides:
//! - A generation-tagged, copy-on-write byte buffer for the loaded file
//! - Printable string extraction with charset-aware decoding
//! - Signature-based carving of embedded JSON, PNG, UnityFS and Ogg data
//! - In-place sub-file replacement and text repacking that never change the
//!   file length
//! - A JSON translation memory for moving string edits in and out
//!
//! No format schema is assumed anywhere. Everything works on raw bytes and
//! heuristics, so carved regions and strings are candidates, not guarantees.

pub mod buffer;
pub mod carve;
pub mod error;
pub mod storage;
pub mod text;

pub use buffer::ByteBuffer;
pub use carve::{
    AssetKind, CarvedRecord, Confirmation, Extraction, OversizeWarning, ReplaceOutcome,
    ReplaceProposal, SignatureCarver, SlotSize, TruncationAdvisory, builtin_signatures, carve,
    commit_replace, extract, propose_replace, replace,
};
pub use error::{Error, Result};
pub use storage::{
    ConfirmPrompt, ImportSummary, MemoryEntry, Session, TranslationMemory, load_memory,
    memory_file_name, modded_file_name, save_memory,
};
pub use text::{
    BudgetCheck, Charset, PendingTranslations, RepackReport, StringRecord, StringScanner,
    TextOptions, check_budget, filter_strings, repack, scan_strings,
};
