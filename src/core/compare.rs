//! Set comparison between used keys and dictionary keys.

use std::collections::BTreeSet;

use crate::core::{AllDictionaries, LanguageDictionary, UsedKeySet};

/// Comparison of one dictionary against the used keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub language: String,
    /// Dictionary file name, e.g. `en.json`.
    pub file_name: String,
    /// Used keys absent from the dictionary, sorted.
    pub missing: Vec<String>,
    /// Dictionary keys never referenced in code, sorted.
    pub extra: Vec<String>,
    /// Number of keys in the dictionary.
    pub total: usize,
    /// Number of distinct keys used in code.
    pub used: usize,
}

impl ComparisonResult {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn compare_language(used: &UsedKeySet, dictionary: &LanguageDictionary) -> ComparisonResult {
    let mut missing: Vec<String> = used
        .iter()
        .filter(|key| !dictionary.contains_key(key))
        .cloned()
        .collect();
    missing.sort();

    // entries is a BTreeMap, so extra is already sorted
    let extra: Vec<String> = dictionary
        .entries
        .keys()
        .filter(|key| !used.contains(*key))
        .cloned()
        .collect();

    ComparisonResult {
        language: dictionary.language.clone(),
        file_name: dictionary.file_name().to_string(),
        missing,
        extra,
        total: dictionary.len(),
        used: used.len(),
    }
}

/// Compare every dictionary, in language order.
pub fn compare_keys(used: &UsedKeySet, dictionaries: &AllDictionaries) -> Vec<ComparisonResult> {
    dictionaries
        .values()
        .map(|dictionary| compare_language(used, dictionary))
        .collect()
}

/// Union of the missing keys of every language.
pub fn collect_missing(results: &[ComparisonResult]) -> BTreeSet<String> {
    results
        .iter()
        .flat_map(|result| result.missing.iter().cloned())
        .collect()
}
