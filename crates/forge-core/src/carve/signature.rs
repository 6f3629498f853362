//! Sub-resource signatures, tried in priority order at every offset.
//!
//! Each probe receives the tail of the buffer starting at the candidate offset.
//! The carver guarantees the tail is longer than [`LOOKAHEAD`] bytes, so fixed
//! signature prefixes can be compared without further bounds checks. Probes
//! that scan forward (JSON, PNG) bound themselves against the tail length.

use memchr::memmem;

use super::{AssetKind, SlotSize};
use crate::buffer::layout::carve::*;

/// A probe returns the region size when the tail starts with its signature
pub type Probe = fn(&[u8]) -> Option<SlotSize>;

#[derive(Clone, Copy)]
pub struct Signature {
    pub name: &'static str,
    pub kind: AssetKind,
    pub probe: Probe,
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signature")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

const BUILTIN_SIGNATURES: [Signature; 4] = [
    Signature {
        name: "json-object",
        kind: AssetKind::Json,
        probe: probe_json,
    },
    Signature {
        name: "png",
        kind: AssetKind::Image,
        probe: probe_png,
    },
    Signature {
        name: "unityfs",
        kind: AssetKind::Archive,
        probe: probe_unity_fs,
    },
    Signature {
        name: "ogg",
        kind: AssetKind::Audio,
        probe: probe_ogg,
    },
];

/// Built-in signatures, highest priority first
pub fn builtin_signatures() -> &'static [Signature] {
    &BUILTIN_SIGNATURES
}

/// `{` followed by `"` or a newline, balanced within [`JSON_WINDOW`] bytes.
///
/// Braces inside string literals are counted too.
fn probe_json(tail: &[u8]) -> Option<SlotSize> {
    if tail[0] != b'{' || !matches!(tail[1], b'"' | b'\n') {
        return None;
    }

    let window = &tail[..tail.len().min(JSON_WINDOW)];
    let mut depth = 1usize;
    for (pos, &byte) in window.iter().enumerate().skip(1) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(SlotSize::Known(pos + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// PNG prefix, sized up to the first IEND chunk type plus its CRC
fn probe_png(tail: &[u8]) -> Option<SlotSize> {
    if !tail.starts_with(&PNG_PREFIX) {
        return None;
    }

    let iend = PNG_SIGNATURE_LEN + memmem::find(&tail[PNG_SIGNATURE_LEN..], PNG_IEND)?;
    let size = iend + PNG_IEND_TRAILER;
    (size <= tail.len()).then_some(SlotSize::Known(size))
}

fn probe_unity_fs(tail: &[u8]) -> Option<SlotSize> {
    tail.starts_with(UNITY_FS_TAG).then_some(SlotSize::Unknown)
}

fn probe_ogg(tail: &[u8]) -> Option<SlotSize> {
    tail.starts_with(OGG_TAG).then_some(SlotSize::Unknown)
}
