//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod exit_status;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use report::ReportOptions;
use run::{AuditSettings, audit};

/// Run the audit, print the report, and return the exit status.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let settings = AuditSettings::resolve(&args)?;

    let summary = audit(&settings, &mut std::io::stdout().lock())?;
    report::print(&summary, ReportOptions::from_config(&settings.config));

    Ok(ExitStatus::from_missing_count(summary.all_missing.len()))
}
