use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::Config,
    core::{UsageScan, extract::extract_keys},
};

/// Exclusion and selection rules for the source walk.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub extensions: HashSet<String>,
    pub ignore_dirs: HashSet<String>,
    pub ignore_files: HashSet<String>,
    /// Glob patterns matched against paths relative to the scan root.
    pub ignore_patterns: Vec<Pattern>,
    /// The dictionary directory, pruned whatever its name.
    pub lang_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl ScanOptions {
    pub fn from_config(config: &Config, lang_dir: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let ignore_patterns = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            extensions: config.extensions.iter().cloned().collect(),
            ignore_dirs: config.ignore_dirs.iter().cloned().collect(),
            ignore_files: config.ignore_files.iter().cloned().collect(),
            ignore_patterns,
            lang_dir,
            verbose,
        })
    }

    fn is_pruned(&self, entry: &DirEntry, root: &Path) -> bool {
        let name = entry.file_name().to_string_lossy();

        if name.starts_with('.') {
            return true;
        }

        let is_dir = entry.file_type().is_dir();
        if is_dir && self.ignore_dirs.contains(&*name) {
            return true;
        }
        if !is_dir && self.ignore_files.contains(&*name) {
            return true;
        }
        if is_dir
            && self
                .lang_dir
                .as_ref()
                .is_some_and(|lang_dir| entry.path() == lang_dir)
        {
            return true;
        }

        if !self.ignore_patterns.is_empty() {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if self.ignore_patterns.iter().any(|p| p.matches_path(relative)) {
                return true;
            }
        }

        false
    }

    fn is_scannable_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.contains(ext))
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        let config = Config::default();
        Self {
            extensions: config.extensions.into_iter().collect(),
            ignore_dirs: config.ignore_dirs.into_iter().collect(),
            ignore_files: config.ignore_files.into_iter().collect(),
            ignore_patterns: Vec::new(),
            lang_dir: None,
            verbose: false,
        }
    }
}

/// Result of walking the project tree.
pub struct ScanResult {
    /// Selected source files, in traversal order.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Walk `root` depth-first and collect the source files to search.
///
/// Excluded directories are pruned, so their contents are never visited.
/// Symbolic links are followed. Entries that cannot be accessed (including
/// link cycles) are counted and the walk continues with their siblings.
pub fn scan_files(root: &Path, options: &ScanOptions) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !options.is_pruned(entry, root));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if options.verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if entry.file_type().is_file() && options.is_scannable_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Read a file as text, replacing invalid UTF-8 sequences.
fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read each file and collect the keys it references.
///
/// Files that cannot be read are counted in `skipped_count` and skipped.
fn extract_from_files(files: &[PathBuf], options: &ScanOptions) -> UsageScan {
    let mut scan = UsageScan::default();
    for path in files {
        match read_lossy(path) {
            Ok(content) => {
                scan.keys.extend(extract_keys(&content));
                scan.files_scanned += 1;
            }
            Err(e) => {
                scan.skipped_count += 1;
                if options.verbose {
                    eprintln!(
                        "{} Cannot read file {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        e
                    );
                }
            }
        }
    }
    scan
}

/// Collect every distinct key referenced under `root`.
pub fn scan_used_keys(root: &Path, options: &ScanOptions) -> UsageScan {
    let ScanResult {
        files,
        skipped_count,
    } = scan_files(root, options);

    let mut scan = extract_from_files(&files, options);
    scan.skipped_count += skipped_count;
    scan
}
