//! Audit orchestration: load dictionaries, scan sources, compare.
//!
//! Progress lines are written to the given writer as each phase completes;
//! warnings go to stderr.

use std::{
    collections::BTreeSet,
    env,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::{
    args::Arguments,
    report::{FAILURE_MARK, SUCCESS_MARK, plural},
};
use crate::{
    config::{Config, load_config},
    core::{
        ComparisonResult, collect_missing, compare_keys,
        file_scanner::{ScanOptions, scan_used_keys},
        parsers::json::scan_dictionary_files,
    },
};

/// Everything the report needs from a finished audit.
#[derive(Debug)]
pub struct AuditSummary {
    /// Per-language comparisons, in language order.
    pub results: Vec<ComparisonResult>,
    /// Union of missing keys across all languages.
    pub all_missing: BTreeSet<String>,
    pub used_count: usize,
    pub files_scanned: usize,
}

/// Project settings after merging CLI flags, config file and defaults.
pub struct AuditSettings {
    pub root: PathBuf,
    pub lang_dir: PathBuf,
    pub config: Config,
    pub verbose: bool,
}

impl AuditSettings {
    /// Resolve the project root and configuration.
    ///
    /// Priority: CLI flags > `.keyauditrc.json` > defaults. Without `--root`,
    /// the root is the directory holding the config file, or the working
    /// directory when there is none.
    pub fn resolve(args: &Arguments) -> Result<Self> {
        let (root, loaded) = match &args.root {
            Some(root) => {
                if !root.is_dir() {
                    bail!("Project root '{}' is not a directory.", root.display());
                }
                (root.clone(), load_config(root)?)
            }
            None => {
                let cwd = env::current_dir().context("Failed to read current directory")?;
                let loaded = load_config(&cwd)?;
                let root = loaded
                    .path
                    .as_deref()
                    .and_then(Path::parent)
                    .map(Path::to_path_buf)
                    .unwrap_or(cwd);
                (root, loaded)
            }
        };

        if args.verbose
            && let Some(path) = &loaded.path
        {
            eprintln!("Using config file {}", path.display());
        }

        let lang_dir = match &args.lang_dir {
            Some(dir) => root.join(dir),
            None => root.join(&loaded.config.lang_dir),
        };

        Ok(Self {
            root,
            lang_dir,
            config: loaded.config,
            verbose: args.verbose,
        })
    }
}

/// Run the audit, writing progress to `out`.
pub fn audit<W: Write>(settings: &AuditSettings, out: &mut W) -> Result<AuditSummary> {
    let options = ScanOptions::from_config(
        &settings.config,
        Some(settings.lang_dir.clone()),
        settings.verbose,
    )?;

    let _ = writeln!(out, "Checking i18n keys...");
    let _ = writeln!(out);

    let lang_display = display_relative(&settings.lang_dir, &settings.root);
    let _ = writeln!(out, "Loading dictionaries from {}", lang_display);
    let loaded = scan_dictionary_files(&settings.lang_dir);
    for dictionary in loaded.dictionaries.values() {
        let _ = writeln!(
            out,
            "{} Loaded {} ({} {})",
            SUCCESS_MARK.green(),
            dictionary.file_name(),
            dictionary.len(),
            plural(dictionary.len(), "key", "keys")
        );
    }
    for warning in &loaded.warnings {
        eprintln!(
            "{} {} Failed to load {}: {}",
            "warning:".bold().yellow(),
            FAILURE_MARK.red(),
            display_relative(Path::new(&warning.file_path), &settings.root),
            warning.error
        );
    }
    // an unreadable directory was already reported above
    if loaded.dictionaries.is_empty() && loaded.warnings.is_empty() {
        eprintln!(
            "{} No dictionary files found in {}",
            "warning:".bold().yellow(),
            lang_display
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Scanning source files...");
    let scan = scan_used_keys(&settings.root, &options);
    let _ = writeln!(
        out,
        "{} Found {} used {} in {} {}",
        SUCCESS_MARK.green(),
        scan.keys.len(),
        plural(scan.keys.len(), "key", "keys"),
        scan.files_scanned,
        plural(scan.files_scanned, "file", "files")
    );
    if scan.skipped_count > 0 && !settings.verbose {
        eprintln!(
            "{} {} path(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            scan.skipped_count,
            "-v".cyan()
        );
    }

    let results = compare_keys(&scan.keys, &loaded.dictionaries);
    let all_missing = collect_missing(&results);

    Ok(AuditSummary {
        results,
        all_missing,
        used_count: scan.keys.len(),
        files_scanned: scan.files_scanned,
    })
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
