use std::collections::BTreeMap;

use serde::Deserialize;

/// A value in a dictionary file.
///
/// Dictionaries are untyped JSON: a key maps either to a translated string or
/// to a nested object of further keys. Anything else (numbers, arrays, ...) is
/// kept as `Other`; the key still counts as declared.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    /// `"title": "Home"`
    Text(String),
    /// `"home": { "title": "Home" }`, flattened to `home.title`
    Nested(BTreeMap<String, MessageValue>),
    Other(serde_json::Value),
}

/// Translations for a single language, loaded from one dictionary file.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDictionary {
    /// Language code, taken from the file stem (`vi.json` -> `vi`).
    pub language: String,
    pub file_path: String,
    /// Flattened keys mapped to their leaf values.
    pub entries: BTreeMap<String, MessageValue>,
}

impl LanguageDictionary {
    pub fn new(language: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            file_path: file_path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Build a dictionary from a parsed top-level object, joining nested
    /// object keys with `.`.
    pub fn from_values(
        language: impl Into<String>,
        file_path: impl Into<String>,
        values: BTreeMap<String, MessageValue>,
    ) -> Self {
        let mut dictionary = Self::new(language, file_path);
        for (key, value) in values {
            dictionary.insert_flattened(key, value);
        }
        dictionary
    }

    fn insert_flattened(&mut self, prefix: String, value: MessageValue) {
        match value {
            MessageValue::Nested(map) => {
                for (key, val) in map {
                    self.insert_flattened(format!("{}.{}", prefix, key), val);
                }
            }
            leaf => {
                self.entries.insert(prefix, leaf);
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File name as shown in the report, e.g. `en.json`.
    pub fn file_name(&self) -> &str {
        std::path::Path::new(&self.file_path)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_path)
    }
}

/// All loaded dictionaries keyed by language code, in language order.
pub type AllDictionaries = BTreeMap<String, LanguageDictionary>;
