use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keyauditrc.json";

/// Directory names pruned from the source walk (contents never visited).
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // version control metadata
    ".git",
    ".svn",
    ".hg",
    // dependency caches
    "node_modules",
    "bower_components",
    // tooling scripts
    "scripts",
    // dictionaries
    "lang",
    // bytecode caches
    "__pycache__",
];

/// File names skipped regardless of extension.
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    ".gitignore",
    ".gitattributes",
    ".npmignore",
    ".dockerignore",
    ".eslintignore",
    ".prettierignore",
];

/// Extensions of script and markup files that are scanned for key usages.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "tsx", "html", "htm"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_lang_dir")]
    pub lang_dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    #[serde(default = "default_ignore_files")]
    pub ignore_files: Vec<String>,
    /// Extra glob patterns, matched against paths relative to the project root.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Extra keys are only listed when there are fewer than this many.
    #[serde(default = "default_extra_preview_threshold")]
    pub extra_preview_threshold: usize,
    #[serde(default = "default_extra_preview_limit")]
    pub extra_preview_limit: usize,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_lang_dir() -> String {
    "lang".to_string()
}

fn default_extensions() -> Vec<String> {
    to_strings(DEFAULT_EXTENSIONS)
}

fn default_ignore_dirs() -> Vec<String> {
    to_strings(DEFAULT_IGNORE_DIRS)
}

fn default_ignore_files() -> Vec<String> {
    to_strings(DEFAULT_IGNORE_FILES)
}

fn default_extra_preview_threshold() -> usize {
    50
}

fn default_extra_preview_limit() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_dir: default_lang_dir(),
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
            ignore_files: default_ignore_files(),
            ignores: Vec::new(),
            extra_preview_threshold: default_extra_preview_threshold(),
            extra_preview_limit: default_extra_preview_limit(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// repository boundary.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
