//! CLI argument definitions using clap.
//!
//! Every flag is optional: invoked without arguments the audit runs with the
//! configuration file (if any) and built-in defaults.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to scan (defaults to the directory holding .keyauditrc.json,
    /// or the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Dictionary directory, relative to the project root (overrides config file)
    #[arg(long)]
    pub lang_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
