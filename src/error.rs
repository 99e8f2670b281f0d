//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionFileError: Issues with the version declaration file
//! - ManifestError: Issues with setup.toml parsing
//! - ConfigError: Issues with declared metadata and dependencies
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version declaration file related errors
    #[error(transparent)]
    VersionFile(#[from] VersionFileError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to the version declaration file
#[derive(Error, Debug)]
pub enum VersionFileError {
    /// Version file not found
    #[error("version file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read version file
    #[error("failed to read version file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is present but binds no `__version__`
    #[error("no __version__ binding in {path}")]
    MissingBinding { path: PathBuf },

    /// A `__version__` binding whose right-hand side is not a string literal
    #[error("__version__ in {path} is not a string literal: {text}")]
    MalformedLiteral { path: PathBuf, text: String },
}

/// Errors related to setup.toml
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A field is present but holds an unusable value
    #[error("invalid field '{field}' in {path}: {message}")]
    InvalidField {
        path: PathBuf,
        field: String,
        message: String,
    },
}

/// Errors related to declared metadata and dependencies
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The same package is declared twice in the install list
    #[error("duplicate dependency '{package}' in install list")]
    DuplicateDependency { package: String },

    /// The companion package does not appear in the install list
    #[error("companion package '{package}' is not in the install list")]
    CompanionNotListed { package: String },

    /// An install entry with no parseable package name
    #[error("invalid requirement '{entry}': {message}")]
    InvalidRequirement { entry: String, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Generic IO error
    #[error("IO error at {path}: {source}")]
    Generic {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VersionFileError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        VersionFileError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VersionFileError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new MissingBinding error
    pub fn missing_binding(path: impl Into<PathBuf>) -> Self {
        VersionFileError::MissingBinding { path: path.into() }
    }

    /// Creates a new MalformedLiteral error
    pub fn malformed_literal(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        VersionFileError::MalformedLiteral {
            path: path.into(),
            text: text.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidField error
    pub fn invalid_field(
        path: impl Into<PathBuf>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ManifestError::InvalidField {
            path: path.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new DuplicateDependency error
    pub fn duplicate_dependency(package: impl Into<String>) -> Self {
        ConfigError::DuplicateDependency {
            package: package.into(),
        }
    }

    /// Creates a new CompanionNotListed error
    pub fn companion_not_listed(package: impl Into<String>) -> Self {
        ConfigError::CompanionNotListed {
            package: package.into(),
        }
    }

    /// Creates a new InvalidRequirement error
    pub fn invalid_requirement(entry: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidRequirement {
            entry: entry.into(),
            message: message.into(),
        }
    }
}

impl IoError {
    /// Creates a new DirectoryNotFound error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        IoError::DirectoryNotFound { path: path.into() }
    }

    /// Creates a new Generic IO error
    pub fn generic(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Generic {
            path: path.into(),
            source,
        }
    }
}
