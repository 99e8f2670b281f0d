//! Resolved version value type
//!
//! Versions follow PEP 440 and may carry an epoch (`1!0+dev`), so no
//! semver-style parsing is applied. The only comparison the domain needs
//! is exact string equality against the development sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version string marking an unreleased/development build
pub const DEV_SENTINEL: &str = "1!0+dev";

/// A version string resolved from a version declaration file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    /// Creates a new VersionString from the resolved literal
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw version text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the development sentinel
    pub fn is_dev(&self) -> bool {
        self.0 == DEV_SENTINEL
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VersionString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_new() {
        let ver = VersionString::new("0.20.1");
        assert_eq!(ver.as_str(), "0.20.1");
    }

    #[test]
    fn test_is_dev_sentinel() {
        let ver = VersionString::new(DEV_SENTINEL);
        assert!(ver.is_dev());
    }

    #[test]
    fn test_is_dev_release() {
        let ver = VersionString::new("1.2.3");
        assert!(!ver.is_dev());
    }

    #[test]
    fn test_is_dev_is_exact_match() {
        // Near-sentinel strings are releases, not dev builds
        assert!(!VersionString::new("1!0+dev1").is_dev());
        assert!(!VersionString::new("0+dev").is_dev());
        assert!(!VersionString::new("1!0").is_dev());
    }

    #[test]
    fn test_version_preserved_verbatim() {
        let ver = VersionString::new("1!2.3.4rc1+build.5");
        assert_eq!(ver.as_str(), "1!2.3.4rc1+build.5");
    }

    #[test]
    fn test_display_trait() {
        let ver = VersionString::new("0.20.1");
        assert_eq!(format!("{}", ver), "0.20.1");
    }

    #[test]
    fn test_from_str() {
        let ver: VersionString = "0.20.1".into();
        assert_eq!(ver, VersionString::new("0.20.1"));
    }

    #[test]
    fn test_serde_transparent() {
        let ver = VersionString::new("0.20.1");
        let json = serde_json::to_string(&ver).unwrap();
        assert_eq!(json, "\"0.20.1\"");

        let parsed: VersionString = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ver);
    }
}
