//! Report formatting and printing.
//!
//! Kept apart from the audit itself so the engine can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::run::AuditSummary;
use crate::{config::Config, core::ComparisonResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const SEPARATOR_WIDTH: usize = 60;

/// Limits for the extra-key preview.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Extra keys are listed only when there are fewer than this many.
    pub extra_preview_threshold: usize,
    /// At most this many extra keys are listed.
    pub extra_preview_limit: usize,
}

impl ReportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extra_preview_threshold: config.extra_preview_threshold,
            extra_preview_limit: config.extra_preview_limit,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// Print the per-language report and the final verdict to stdout.
pub fn print(summary: &AuditSummary, options: ReportOptions) {
    print_to(summary, options, &mut io::stdout().lock());
}

/// Print the report to a custom writer.
pub fn print_to<W: Write>(summary: &AuditSummary, options: ReportOptions, writer: &mut W) {
    for result in &summary.results {
        print_language(result, options, writer);
    }
    print_verdict(summary, writer);
}

fn print_language<W: Write>(result: &ComparisonResult, options: ReportOptions, writer: &mut W) {
    let separator = "=".repeat(SEPARATOR_WIDTH);

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", separator.blue());
    let _ = writeln!(writer, "{}", result.file_name.bold());
    let _ = writeln!(writer, "{}", separator.blue());
    let _ = writeln!(writer, "Total keys: {}", result.total);
    let _ = writeln!(writer, "Used keys: {}", result.used);
    let _ = writeln!(writer, "Missing keys: {}", result.missing.len());
    let _ = writeln!(writer, "Extra keys (unused): {}", result.extra.len());

    if !result.missing.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("Missing keys ({}):", result.missing.len())
                .bold()
                .red()
        );
        for key in &result.missing {
            print_key(key, writer);
        }
    }

    let extra_count = result.extra.len();
    if extra_count > 0 && extra_count < options.extra_preview_threshold {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} {}",
            "!".yellow(),
            format!("Extra keys ({}, possibly unused):", extra_count)
                .bold()
                .yellow()
        );
        for key in result.extra.iter().take(options.extra_preview_limit) {
            print_key(key, writer);
        }
        if extra_count > options.extra_preview_limit {
            let _ = writeln!(
                writer,
                "   {}",
                format!("... and {} more", extra_count - options.extra_preview_limit).dimmed()
            );
        }
    }
}

fn print_verdict<W: Write>(summary: &AuditSummary, writer: &mut W) {
    let _ = writeln!(writer);
    if summary.all_missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All used keys are present in every dictionary".green()
        );
        return;
    }

    let count = summary.all_missing.len();
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} {} missing from at least one dictionary. Keys to add:",
            count,
            plural(count, "key", "keys")
        )
        .bold()
        .red()
    );
    for key in &summary.all_missing {
        print_key(key, writer);
    }
}

fn print_key<W: Write>(key: &str, writer: &mut W) {
    let _ = writeln!(writer, "   - \"{}\"", key);
}
