use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pending operator edits, keyed by the offset of the string they replace.
///
/// Offsets are kept even when no current string record matches them; those
/// entries are reported as unmatched at repack time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingTranslations {
    entries: BTreeMap<usize, String>,
}

impl PendingTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pending text for `offset`. An empty text clears the edit.
    ///
    /// Returns the previous pending text, if any.
    pub fn set(&mut self, offset: usize, text: impl Into<String>) -> Option<String> {
        let text = text.into();
        if text.is_empty() {
            self.entries.remove(&offset)
        } else {
            self.entries.insert(offset, text)
        }
    }

    pub fn get(&self, offset: usize) -> Option<&str> {
        self.entries.get(&offset).map(String::as_str)
    }

    pub fn remove(&mut self, offset: usize) -> Option<String> {
        self.entries.remove(&offset)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .map(|(offset, text)| (*offset, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_overwrite() {
        let mut pending = PendingTranslations::new();
        assert_eq!(pending.set(10, "hola"), None);
        assert_eq!(pending.set(10, "hey"), Some("hola".to_string()));
        assert_eq!(pending.get(10), Some("hey"));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_empty_text_clears_entry() {
        let mut pending = PendingTranslations::new();
        pending.set(4, "text");
        assert_eq!(pending.set(4, ""), Some("text".to_string()));
        assert!(pending.is_empty());
        assert_eq!(pending.set(8, ""), None);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_iter_is_ordered_by_offset() {
        let mut pending = PendingTranslations::new();
        pending.set(300, "c");
        pending.set(5, "a");
        pending.set(40, "b");
        let offsets: Vec<usize> = pending.iter().map(|(offset, _)| offset).collect();
        assert_eq!(offsets, vec![5, 40, 300]);
    }
}
