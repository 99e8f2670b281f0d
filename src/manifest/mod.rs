//! setup.toml loading and validation
//!
//! The manifest declares the static half of the distribution metadata:
//!
//! ```toml
//! [package]
//! name = "dagster-datahub"
//! author = "Dagster Labs"
//! author-email = "hello@dagsterlabs.com"
//! license = "Apache-2.0"
//! description = "..."
//! url = "https://example.com"
//! classifiers = ["Operating System :: OS Independent"]
//! version-file = "dagster_datahub/version.py"
//! exclude-packages = ["dagster_datahub_tests*"]
//! zip-safe = false
//!
//! [dependencies]
//! install = ["dagster", "requests"]
//! companion = "dagster"
//! ```
//!
//! The version itself is never declared here; it is resolved from
//! `version-file` at generation time.

use crate::error::ManifestError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default manifest filename looked up under the package root
pub const MANIFEST_FILENAME: &str = "setup.toml";

/// Parsed setup.toml manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupManifest {
    /// Static package metadata
    pub package: PackageSection,
    /// Dependency declarations
    #[serde(default)]
    pub dependencies: DependenciesSection,
    /// Directory the manifest was loaded from; relative paths resolve
    /// against it
    #[serde(skip)]
    pub root: PathBuf,
}

/// The `[package]` section of setup.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PackageSection {
    /// Distribution name
    pub name: String,
    /// Author name
    pub author: String,
    /// Author contact address
    pub author_email: String,
    /// License identifier
    pub license: String,
    /// One-line description
    pub description: String,
    /// Project URL
    pub url: String,
    /// Trove classifiers
    #[serde(default)]
    pub classifiers: Vec<String>,
    /// Path of the version declaration file, relative to the manifest
    pub version_file: PathBuf,
    /// Package name patterns excluded from discovery
    #[serde(default)]
    pub exclude_packages: Vec<String>,
    /// Whether the distribution is safe to install zipped
    #[serde(default)]
    pub zip_safe: bool,
}

/// The `[dependencies]` section of setup.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependenciesSection {
    /// Install requirement entries, in the order they should be emitted
    #[serde(default)]
    pub install: Vec<String>,
    /// Package whose constraint is computed from the resolved version
    #[serde(default)]
    pub companion: Option<String>,
}

impl SetupManifest {
    /// Loads and validates `<dir>/setup.toml`
    pub fn load(dir: &Path) -> Result<Self, ManifestError> {
        Self::load_file(&dir.join(MANIFEST_FILENAME))
    }

    /// Loads and validates a manifest from an explicit path
    pub fn load_file(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::not_found(path));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

        let mut manifest: SetupManifest = toml::from_str(&content)
            .map_err(|e| ManifestError::toml_parse_error(path, e.to_string()))?;

        manifest.root = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        manifest.validate(path)?;
        Ok(manifest)
    }

    /// Absolute or root-relative path of the version declaration file
    pub fn version_file_path(&self) -> PathBuf {
        if self.package.version_file.is_absolute() {
            self.package.version_file.clone()
        } else {
            self.root.join(&self.package.version_file)
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ManifestError> {
        if self.package.name.trim().is_empty() {
            return Err(ManifestError::invalid_field(
                path,
                "name",
                "must not be empty",
            ));
        }

        if self.package.version_file.as_os_str().is_empty() {
            return Err(ManifestError::invalid_field(
                path,
                "version-file",
                "must not be empty",
            ));
        }

        if let Some(companion) = &self.dependencies.companion {
            if companion.trim().is_empty() {
                return Err(ManifestError::invalid_field(
                    path,
                    "companion",
                    "must not be empty",
                ));
            }
        }

        Ok(())
    }
}
