//! CLI argument parsing module for verpin

use clap::Parser;
use std::path::PathBuf;

/// Packaging metadata generator for Python integration packages
#[derive(Parser, Debug, Clone)]
#[command(
    name = "verpin",
    version,
    about = "Packaging metadata generator with out-of-band version resolution"
)]
pub struct CliArgs {
    /// Package root directory containing setup.toml (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Explicit manifest path overriding <path>/setup.toml
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    // Output options
    /// Output resolved metadata in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print only the final install requirements, one per line
    #[arg(long)]
    pub requires: bool,

    /// Validate the package without emitting metadata
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}
