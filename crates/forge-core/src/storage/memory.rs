//! Translation memory interchange document.
//!
//! The document is a JSON array with one object per scanned string:
//!
//! ```json
//! [
//!   { "offset": 16, "original": "Start Game", "translation": "Iniciar" },
//!   { "offset": 48, "original": "Options", "translation": "" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::text::{PendingTranslations, StringRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub offset: usize,
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub translation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMemory {
    pub entries: Vec<MemoryEntry>,
}

/// Counts from merging a document into pending translations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries in the document
    pub entries: usize,
    /// Entries with a non-empty translation, merged into the pending map
    pub merged: usize,
}

impl TranslationMemory {
    /// One entry per record, in record order; missing translations are empty
    pub fn build(records: &[StringRecord], translations: &PendingTranslations) -> Self {
        let entries = records
            .iter()
            .map(|record| MemoryEntry {
                offset: record.offset,
                original: record.original.clone(),
                translation: translations
                    .get(record.offset)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();
        Self { entries }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::MalformedDocument(e.to_string()))
    }

    /// Merge every entry with a non-empty translation, keyed by offset.
    ///
    /// Offsets unknown to the current scan are kept; they surface as unmatched
    /// when repacking.
    pub fn merge_into(&self, translations: &mut PendingTranslations) -> ImportSummary {
        let mut merged = 0;
        for entry in &self.entries {
            if !entry.translation.is_empty() {
                translations.set(entry.offset, entry.translation.clone());
                merged += 1;
            }
        }
        debug!(
            "Merged {} of {} translation memory entries",
            merged,
            self.entries.len()
        );
        ImportSummary {
            entries: self.entries.len(),
            merged,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn load_memory<P: AsRef<Path>>(path: P) -> Result<TranslationMemory> {
    let content = fs::read_to_string(&path)?;
    TranslationMemory::from_json(&content)
}

pub fn save_memory<P: AsRef<Path>>(path: P, memory: &TranslationMemory) -> Result<()> {
    fs::write(&path, memory.to_json()?)?;
    info!(
        "Saved {} translation entries to {}",
        memory.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn record(offset: usize, original: &str) -> StringRecord {
        StringRecord {
            id: 0,
            offset,
            length: original.len(),
            original: original.to_string(),
            generation: 0,
        }
    }

    #[test]
    fn test_build_defaults_missing_translation_to_empty() {
        let records = vec![record(16, "Start Game"), record(48, "Options")];
        let mut pending = PendingTranslations::new();
        pending.set(16, "Iniciar");

        let memory = TranslationMemory::build(&records, &pending);
        assert_eq!(memory.len(), 2);
        assert_eq!(memory.entries[0].translation, "Iniciar");
        assert_eq!(memory.entries[1].translation, "");
        assert_eq!(memory.entries[1].original, "Options");
    }

    #[test]
    fn test_json_shape() {
        let memory = TranslationMemory::build(&[record(3, "abcd")], &PendingTranslations::new());
        let value: serde_json::Value = serde_json::from_str(&memory.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "offset": 3, "original": "abcd", "translation": "" }])
        );
    }

    #[test]
    fn test_merge_skips_empty_and_keeps_unknown_offsets() {
        let memory = TranslationMemory::from_json(
            r#"[
                {"offset": 1, "original": "a", "translation": "x"},
                {"offset": 2, "original": "b", "translation": ""},
                {"offset": 9000, "translation": "orphan"}
            ]"#,
        )
        .unwrap();

        let mut pending = PendingTranslations::new();
        pending.set(2, "kept");
        let summary = memory.merge_into(&mut pending);

        assert_eq!(summary, ImportSummary { entries: 3, merged: 2 });
        assert_eq!(pending.get(1), Some("x"));
        assert_eq!(pending.get(2), Some("kept"));
        assert_eq!(pending.get(9000), Some("orphan"));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            TranslationMemory::from_json("{not json"),
            Err(Error::MalformedDocument(_))
        ));
        assert!(matches!(
            TranslationMemory::from_json(r#"{"offset": 1}"#),
            Err(Error::MalformedDocument(_))
        ));
        assert!(matches!(
            TranslationMemory::from_json(r#"[{"offset": -4, "translation": "x"}]"#),
            Err(Error::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut pending = PendingTranslations::new();
        pending.set(5, "hola");
        let memory = TranslationMemory::build(&[record(5, "hello")], &pending);

        save_memory(temp_file.path(), &memory).unwrap();
        let loaded = load_memory(temp_file.path()).unwrap();
        assert_eq!(loaded, memory);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_memory(dir.path().join("missing.json")).unwrap_err();
        assert!(err.is_not_found());
    }
}
