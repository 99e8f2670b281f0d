//! Text output formatter for human-readable display
//!
//! Shows the resolved metadata as a labeled summary: name and version
//! (with a dev-build marker when the version is the development sentinel),
//! the static fields, discovered packages, and the final install list.

use crate::generator::GeneratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn version_label(&self, result: &GeneratorResult) -> String {
        let version = result.metadata.version.as_str();
        if result.metadata.is_dev_build() {
            if self.color {
                format!("{} {}", version, "(dev build)".yellow())
            } else {
                format!("{} (dev build)", version)
            }
        } else if self.color {
            version.green().to_string()
        } else {
            version.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &GeneratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let meta = &result.metadata;

        if self.verbosity == Verbosity::Quiet {
            writeln!(writer, "{} {}", meta.name, meta.version)?;
            return Ok(());
        }

        writeln!(
            writer,
            "{} {}",
            self.heading(&meta.name),
            self.version_label(result)
        )?;
        writeln!(writer, "  author:      {} <{}>", meta.author, meta.author_email)?;
        writeln!(writer, "  license:     {}", meta.license)?;
        writeln!(writer, "  description: {}", meta.description)?;
        writeln!(writer, "  url:         {}", meta.url)?;
        writeln!(writer, "  zip-safe:    {}", meta.zip_safe)?;

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "  resolved from: {}",
                result.version_file.display()
            )?;

            writeln!(writer)?;
            writeln!(writer, "{}", self.heading("classifiers"))?;
            for classifier in &meta.classifiers {
                writeln!(writer, "  {}", classifier)?;
            }
        }

        writeln!(writer)?;
        writeln!(writer, "{}", self.heading("packages"))?;
        for package in &meta.packages {
            writeln!(writer, "  {}", package)?;
        }

        writeln!(writer)?;
        writeln!(writer, "{}", self.heading("requires"))?;
        for entry in &meta.requires {
            writeln!(writer, "  {}", entry)?;
        }

        Ok(())
    }
}
