//! JSON output formatter for machine processing

use crate::generator::GeneratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// The resolved distribution metadata
    #[serde(flatten)]
    metadata: &'a crate::domain::DistMetadata,
    /// Whether the version is the development sentinel
    dev_build: bool,
    /// Source of the resolved version, included in verbose mode
    #[serde(skip_serializing_if = "Option::is_none")]
    version_file: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &GeneratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let version_file = match self.verbosity {
            Verbosity::Verbose => Some(result.version_file.display().to_string()),
            _ => None,
        };

        let output = JsonOutput {
            metadata: &result.metadata,
            dev_build: result.metadata.is_dev_build(),
            version_file,
        };

        let json = serde_json::to_string_pretty(&output)?;
        writeln!(writer, "{}", json)
    }
}
