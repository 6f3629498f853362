//! Signature-based sub-file carving.
//!
//! The carver has no knowledge of any container format. It finds candidate
//! regions by magic bytes and simple heuristics, then lets the operator copy a
//! region out or overwrite it in place.

mod carver;
mod extractor;
mod record;
mod replacer;
mod signature;

pub use carver::{SignatureCarver, carve};
pub use extractor::{Extraction, TruncationAdvisory, extract};
pub use record::{AssetKind, CarvedRecord, SlotSize};
pub use replacer::{
    Confirmation, OversizeWarning, ReplaceOutcome, ReplaceProposal, commit_replace,
    propose_replace, replace,
};
pub use signature::{Probe, Signature, builtin_signatures};
