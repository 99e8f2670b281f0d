//! verpin - Packaging metadata generator CLI
//!
//! Resolves a package version out-of-band from its version declaration
//! file, builds the dependency list with the companion package pinned to
//! that version (unless it is a development build), and emits the full
//! distribution metadata.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use verpin::cli::CliArgs;
use verpin::generator::Generator;
use verpin::output::{create_formatter, OutputConfig};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    // Print version info in verbose mode
    if args.verbose {
        eprintln!("verpin v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
        if args.check {
            eprintln!("Mode: check");
        }
    }

    let generator = Generator::new(args.clone());
    let result = generator.run()?;

    if args.check {
        if !args.quiet {
            println!(
                "ok: {} {} ({} requirement(s), {} package(s))",
                result.metadata.name,
                result.metadata.version,
                result.metadata.requires.len(),
                result.metadata.packages.len()
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let output_config = OutputConfig::from_cli(args.json, args.requires, args.verbose, args.quiet);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&result, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
