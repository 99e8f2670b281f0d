//! Bare requirements listing, one entry per line
//!
//! The form consumed when only the final install list is wanted, e.g. for
//! piping into other packaging tooling.

use crate::generator::GeneratorResult;
use crate::output::OutputFormatter;
use std::io::Write;

/// Formatter that prints only the install requirements
pub struct RequiresFormatter;

impl OutputFormatter for RequiresFormatter {
    fn format(&self, result: &GeneratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for entry in &result.metadata.requires {
            writeln!(writer, "{}", entry)?;
        }
        Ok(())
    }
}
