//! Importable package discovery
//!
//! Walks the package root for directories containing an `__init__.py` and
//! reports them as dotted package paths. Directories without an
//! `__init__.py` are not descended into. Exclude patterns support exact
//! names and the trailing-`*` form (`dagster_datahub_tests*`).

use crate::error::IoError;
use std::path::Path;

/// Discovers importable packages under `root`, sorted for deterministic output
pub fn find_packages(root: &Path, exclude: &[String]) -> Result<Vec<String>, IoError> {
    if !root.is_dir() {
        return Err(IoError::directory_not_found(root));
    }

    let mut packages = Vec::new();
    collect_packages(root, "", exclude, &mut packages)?;
    packages.sort();
    Ok(packages)
}

/// Checks a dotted package path against the exclude patterns
fn is_excluded(dotted: &str, exclude: &[String]) -> bool {
    exclude.iter().any(|pattern| {
        if let Some(prefix) = pattern.strip_suffix('*') {
            dotted.starts_with(prefix)
        } else {
            dotted == pattern
        }
    })
}

fn collect_packages(
    dir: &Path,
    parent: &str,
    exclude: &[String],
    packages: &mut Vec<String>,
) -> Result<(), IoError> {
    let entries = std::fs::read_dir(dir).map_err(|e| IoError::generic(dir, e))?;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if !path.join("__init__.py").is_file() {
            continue;
        }

        let dotted = if parent.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", parent, name)
        };

        // Excluding a package also drops everything beneath it
        if is_excluded(&dotted, exclude) {
            continue;
        }

        packages.push(dotted.clone());
        collect_packages(&path, &dotted, exclude, packages)?;
    }

    Ok(())
}
