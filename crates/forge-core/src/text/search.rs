use super::{PendingTranslations, StringRecord};

/// Records whose original text or pending translation contains `query`,
/// ignoring case. An empty query keeps every record.
pub fn filter_strings<'a>(
    records: &'a [StringRecord],
    translations: &PendingTranslations,
    query: &str,
) -> Vec<&'a StringRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.original.to_lowercase().contains(&needle)
                || translations
                    .get(record.offset)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}
