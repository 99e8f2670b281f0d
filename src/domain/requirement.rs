//! Dependency requirement and constraint types
//!
//! Handles PEP 508-style entries as they appear in an install list:
//! - Bare name: `packaging`
//! - Extras: `acryl-datahub[datahub-rest, datahub-kafka]`
//! - Version constraints: `pydantic>=1.10.0,<2.0.0`
//!
//! The companion package gets its constraint computed from the resolved
//! version instead of being declared.

use crate::domain::VersionString;
use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// Regex to split a PEP 508 dependency specifier into name and tail
static PEP508_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9][-a-zA-Z0-9._]*)\s*(.*)$").unwrap());

/// Version constraint for a single package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "version")]
pub enum Constraint {
    /// No constraint, any version is acceptable
    Unconstrained,
    /// Exact-pin constraint (`==<version>`)
    Exact(VersionString),
}

impl Constraint {
    /// Computes the companion constraint for a resolved version.
    ///
    /// Development builds stay unconstrained so local installs do not
    /// demand a nonexistent exact version; releases are pinned exactly.
    pub fn for_version(version: &VersionString) -> Self {
        if version.is_dev() {
            Constraint::Unconstrained
        } else {
            Constraint::Exact(version.clone())
        }
    }

    /// Renders the constraint suffix (`""` or `==<version>`)
    pub fn render(&self) -> String {
        match self {
            Constraint::Unconstrained => String::new(),
            Constraint::Exact(version) => format!("=={}", version),
        }
    }

    /// Returns true if this constraint pins an exact version
    pub fn is_pinned(&self) -> bool {
        matches!(self, Constraint::Exact(_))
    }
}

/// A single entry in the install list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Package name
    pub name: String,
    /// Raw specifier tail (extras and/or version constraints), possibly empty
    pub tail: String,
}

impl Requirement {
    /// Creates a requirement from a name and specifier tail
    pub fn new(name: impl Into<String>, tail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tail: tail.into(),
        }
    }

    /// Parses a raw install entry into name and tail
    pub fn parse(entry: &str) -> Result<Self, ConfigError> {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::invalid_requirement(entry, "empty entry"));
        }

        let caps = PEP508_RE
            .captures(trimmed)
            .ok_or_else(|| ConfigError::invalid_requirement(entry, "no package name"))?;

        let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let tail = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        Ok(Self::new(name, tail))
    }

    /// Creates the companion requirement with a computed constraint
    pub fn companion(name: impl Into<String>, version: &VersionString) -> Self {
        Self::new(name, Constraint::for_version(version).render())
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.tail)
    }
}

/// The ordered dependency list for a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
    requirements: Vec<Requirement>,
}

impl DependencySet {
    /// Builds the dependency set from the declared install list.
    ///
    /// Entries keep their declared order. The entry whose name matches the
    /// companion package is replaced in place by the companion requirement
    /// with its constraint computed from `version`.
    pub fn build(
        install: &[String],
        companion: Option<&str>,
        version: &VersionString,
    ) -> Result<Self, ConfigError> {
        let mut requirements = Vec::with_capacity(install.len());
        let mut companion_seen = false;

        for entry in install {
            let parsed = Requirement::parse(entry)?;
            if requirements
                .iter()
                .any(|r: &Requirement| r.name == parsed.name)
            {
                return Err(ConfigError::duplicate_dependency(parsed.name));
            }

            if companion == Some(parsed.name.as_str()) {
                companion_seen = true;
                requirements.push(Requirement::companion(parsed.name, version));
            } else {
                requirements.push(parsed);
            }
        }

        if let Some(name) = companion {
            if !companion_seen {
                return Err(ConfigError::companion_not_listed(name));
            }
        }

        Ok(Self { requirements })
    }

    /// Returns the requirements in declared order
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// Looks up a requirement by package name
    pub fn get(&self, name: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.name == name)
    }

    /// Renders each requirement as an install entry string
    pub fn render(&self) -> Vec<String> {
        self.requirements.iter().map(|r| r.to_string()).collect()
    }

    /// Number of requirements in the set
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn install_list() -> Vec<String> {
        vec![
            "acryl-datahub[datahub-rest, datahub-kafka]".to_string(),
            "dagster".to_string(),
            "packaging".to_string(),
            "requests".to_string(),
            "pydantic>=1.10.0,<2.0.0".to_string(),
        ]
    }

    #[test]
    fn test_constraint_for_release_version() {
        let constraint = Constraint::for_version(&VersionString::new("0.20.1"));
        assert_eq!(constraint, Constraint::Exact(VersionString::new("0.20.1")));
        assert_eq!(constraint.render(), "==0.20.1");
        assert!(constraint.is_pinned());
    }

    #[test]
    fn test_constraint_for_dev_version() {
        let constraint = Constraint::for_version(&VersionString::new("1!0+dev"));
        assert_eq!(constraint, Constraint::Unconstrained);
        assert_eq!(constraint.render(), "");
        assert!(!constraint.is_pinned());
    }

    #[test]
    fn test_constraint_render_is_double_equals_plus_version() {
        for v in ["0.1.0", "1.2.3", "2.0.0rc1", "1!2.3"] {
            let constraint = Constraint::for_version(&VersionString::new(v));
            assert_eq!(constraint.render(), format!("=={}", v));
        }
    }

    #[test]
    fn test_requirement_parse_bare_name() {
        let req = Requirement::parse("packaging").unwrap();
        assert_eq!(req.name, "packaging");
        assert_eq!(req.tail, "");
        assert_eq!(req.to_string(), "packaging");
    }

    #[test]
    fn test_requirement_parse_with_extras() {
        let req = Requirement::parse("acryl-datahub[datahub-rest, datahub-kafka]").unwrap();
        assert_eq!(req.name, "acryl-datahub");
        assert_eq!(req.tail, "[datahub-rest, datahub-kafka]");
        assert_eq!(req.to_string(), "acryl-datahub[datahub-rest, datahub-kafka]");
    }

    #[test]
    fn test_requirement_parse_with_range() {
        let req = Requirement::parse("pydantic>=1.10.0,<2.0.0").unwrap();
        assert_eq!(req.name, "pydantic");
        assert_eq!(req.tail, ">=1.10.0,<2.0.0");
    }

    #[test]
    fn test_requirement_parse_trims_whitespace() {
        let req = Requirement::parse("  requests  ").unwrap();
        assert_eq!(req.name, "requests");
        assert_eq!(req.tail, "");
    }

    #[test]
    fn test_requirement_parse_empty() {
        let err = Requirement::parse("").unwrap_err();
        assert!(format!("{}", err).contains("empty entry"));
    }

    #[test]
    fn test_requirement_parse_no_name() {
        let err = Requirement::parse(">=1.0").unwrap_err();
        assert!(format!("{}", err).contains("no package name"));
    }

    #[test]
    fn test_companion_requirement_release() {
        let req = Requirement::companion("dagster", &VersionString::new("0.20.1"));
        assert_eq!(req.to_string(), "dagster==0.20.1");
    }

    #[test]
    fn test_companion_requirement_dev() {
        let req = Requirement::companion("dagster", &VersionString::new("1!0+dev"));
        assert_eq!(req.to_string(), "dagster");
    }

    #[test]
    fn test_build_pins_companion_in_place() {
        let set =
            DependencySet::build(&install_list(), Some("dagster"), &VersionString::new("0.20.1"))
                .unwrap();

        assert_eq!(
            set.render(),
            vec![
                "acryl-datahub[datahub-rest, datahub-kafka]",
                "dagster==0.20.1",
                "packaging",
                "requests",
                "pydantic>=1.10.0,<2.0.0",
            ]
        );
    }

    #[test]
    fn test_build_dev_version_leaves_companion_unpinned() {
        let set =
            DependencySet::build(&install_list(), Some("dagster"), &VersionString::new("1!0+dev"))
                .unwrap();

        assert_eq!(set.get("dagster").unwrap().to_string(), "dagster");
    }

    #[test]
    fn test_build_without_companion() {
        let install = vec!["packaging".to_string(), "requests".to_string()];
        let set = DependencySet::build(&install, None, &VersionString::new("0.20.1")).unwrap();
        assert_eq!(set.render(), vec!["packaging", "requests"]);
    }

    #[test]
    fn test_build_rejects_duplicate_names() {
        let install = vec!["requests".to_string(), "requests>=2.28.0".to_string()];
        let err = DependencySet::build(&install, None, &VersionString::new("0.20.1")).unwrap_err();
        assert!(format!("{}", err).contains("duplicate dependency 'requests'"));
    }

    #[test]
    fn test_build_rejects_missing_companion() {
        let install = vec!["packaging".to_string()];
        let err = DependencySet::build(&install, Some("dagster"), &VersionString::new("0.20.1"))
            .unwrap_err();
        assert!(format!("{}", err).contains("companion package 'dagster'"));
    }

    #[test]
    fn test_build_preserves_declared_order() {
        let set =
            DependencySet::build(&install_list(), Some("dagster"), &VersionString::new("0.20.1"))
                .unwrap();
        let names: Vec<_> = set.requirements().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["acryl-datahub", "dagster", "packaging", "requests", "pydantic"]
        );
    }

    #[test]
    fn test_dependency_set_get() {
        let set =
            DependencySet::build(&install_list(), Some("dagster"), &VersionString::new("0.20.1"))
                .unwrap();
        assert!(set.get("pydantic").is_some());
        assert!(set.get("flask").is_none());
    }

    #[test]
    fn test_dependency_set_len() {
        let set =
            DependencySet::build(&install_list(), Some("dagster"), &VersionString::new("0.20.1"))
                .unwrap();
        assert_eq!(set.len(), 5);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_serde_requirement() {
        let req = Requirement::new("dagster", "==0.20.1");
        let json = serde_json::to_string(&req).unwrap();
        let parsed: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }
}
