use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};

use crate::core::{AllDictionaries, LanguageDictionary, MessageValue};

/// A warning from loading dictionary files.
#[derive(Debug, Clone)]
pub struct DictionaryWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadDictionariesResult {
    pub dictionaries: AllDictionaries,
    pub warnings: Vec<DictionaryWarning>,
}

pub fn parse_json_file(path: &Path, language: &str) -> Result<LanguageDictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let values: BTreeMap<String, MessageValue> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    Ok(LanguageDictionary::from_values(
        language,
        path.to_string_lossy(),
        values,
    ))
}

/// Extracts the language code from a dictionary file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/lang/vi.json" -> Some("vi")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `*.json` file directly inside `lang_dir`.
///
/// Files that cannot be read or parsed are reported as warnings and skipped.
/// A missing directory yields an empty result with a warning rather than an
/// error, so the audit still runs.
pub fn scan_dictionary_files(lang_dir: impl AsRef<Path>) -> LoadDictionariesResult {
    let lang_dir = lang_dir.as_ref();
    let mut result = LoadDictionariesResult::default();

    let entries = match fs::read_dir(lang_dir) {
        Ok(entries) => entries,
        Err(e) => {
            result.warnings.push(DictionaryWarning {
                file_path: lang_dir.to_string_lossy().to_string(),
                error: format!("Cannot read dictionary directory: {}", e),
            });
            return result;
        }
    };

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    for path in paths {
        let Some(language) = extract_language(&path) else {
            continue;
        };
        match parse_json_file(&path, &language) {
            Ok(dictionary) => {
                result.dictionaries.insert(language, dictionary);
            }
            Err(e) => {
                result.warnings.push(DictionaryWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    result
}
