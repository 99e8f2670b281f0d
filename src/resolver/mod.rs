//! Out-of-band version resolution
//!
//! Extracts the `__version__` string literal from a version declaration
//! file without importing or executing anything. Only literal assignments
//! are supported:
//!
//! ```text
//! __version__ = "0.20.1"
//! __version__ = '1!0+dev'  # dev sentinel
//! ```
//!
//! Other bindings in the file are ignored.

use crate::domain::VersionString;
use crate::error::VersionFileError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

// Matches a `__version__ = <rhs>` binding; the right-hand side is
// validated separately against LITERAL_RE.
static BINDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*__version__\s*=\s*(.+?)\s*$").unwrap());

// A single- or double-quoted string literal, optionally followed by a comment
static LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:"([^"]*)"|'([^']*)')\s*(?:#.*)?$"#).unwrap());

/// Resolves the version bound to `__version__` in the given file
pub fn resolve_version(path: &Path) -> Result<VersionString, VersionFileError> {
    if !path.exists() {
        return Err(VersionFileError::not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| VersionFileError::read_error(path, e))?;

    parse_version(&content, path)
}

/// Parses the `__version__` binding out of version-file content
pub fn parse_version(content: &str, path: &Path) -> Result<VersionString, VersionFileError> {
    let caps = BINDING_RE
        .captures(content)
        .ok_or_else(|| VersionFileError::missing_binding(path))?;

    let rhs = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    let literal = LITERAL_RE
        .captures(rhs)
        .ok_or_else(|| VersionFileError::malformed_literal(path, rhs))?;

    let value = literal
        .get(1)
        .or_else(|| literal.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default();

    Ok(VersionString::new(value))
}
