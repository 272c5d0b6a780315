//! Key extraction from raw source text.
//!
//! Extraction is regex based: it recognizes literal keys passed to the
//! translation accessors and the `data-i18n*` HTML attributes. Keys built at
//! runtime (`Lang.get(prefix + name)`) or literals spanning lines are not
//! recognized.

use std::sync::LazyLock;

use regex::Regex;

/// A key-referencing syntax. Capture group 1 is the key.
pub struct KeyPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl KeyPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

pub static KEY_PATTERNS: LazyLock<Vec<KeyPattern>> = LazyLock::new(|| {
    vec![
        KeyPattern::new("window.Lang.get", r#"window\.Lang\.get\(['"]([^'"]+)['"]"#),
        KeyPattern::new("Lang.get", r#"Lang\.get\(['"]([^'"]+)['"]"#),
        KeyPattern::new("getLang", r#"getLang\(['"]([^'"]+)['"]"#),
        KeyPattern::new("data-i18n", r#"data-i18n=['"]([^'"]+)['"]"#),
        KeyPattern::new(
            "data-i18n-placeholder",
            r#"data-i18n-placeholder=['"]([^'"]+)['"]"#,
        ),
        KeyPattern::new("data-i18n-title", r#"data-i18n-title=['"]([^'"]+)['"]"#),
        KeyPattern::new("data-i18n-value", r#"data-i18n-value=['"]([^'"]+)['"]"#),
    ]
});

/// Extract every key referenced in `content`, in pattern order.
///
/// The same key may appear more than once; callers collect into a set.
pub fn extract_keys(content: &str) -> Vec<String> {
    KEY_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern
                .regex
                .captures_iter(content)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
