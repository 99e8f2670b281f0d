//! Distribution metadata structures

use crate::domain::VersionString;
use serde::{Deserialize, Serialize};

/// The resolved distribution metadata consumed by a packaging tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistMetadata {
    /// Distribution name
    pub name: String,
    /// Resolved version
    pub version: VersionString,
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
    pub classifiers: Vec<String>,
    /// Discovered importable packages, dotted paths in sorted order
    pub packages: Vec<String>,
    /// Final install requirements in declared order
    pub requires: Vec<String>,
    /// Whether the distribution is safe to install zipped
    pub zip_safe: bool,
}

impl DistMetadata {
    /// Returns true if this metadata describes a development build
    pub fn is_dev_build(&self) -> bool {
        self.version.is_dev()
    }
}
