//! Metadata generation pipeline
//!
//! Coordinates the workflow: load manifest → resolve version → build
//! dependency set → discover packages → assemble metadata. Synchronous
//! and run-to-completion; the first failing step aborts the run.

use crate::cli::CliArgs;
use crate::domain::{DependencySet, DistMetadata, VersionString};
use crate::error::AppError;
use crate::manifest::SetupManifest;
use crate::packages::find_packages;
use crate::resolver::resolve_version;
use std::path::PathBuf;

/// Coordinates metadata generation for a single package root
pub struct Generator {
    args: CliArgs,
}

/// Result of running the generator
#[derive(Debug)]
pub struct GeneratorResult {
    /// The assembled distribution metadata
    pub metadata: DistMetadata,
    /// Path the version was resolved from
    pub version_file: PathBuf,
}

impl Generator {
    /// Creates a new Generator from CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Runs the full pipeline and assembles the distribution metadata
    pub fn run(&self) -> Result<GeneratorResult, AppError> {
        let manifest = match &self.args.manifest {
            Some(path) => SetupManifest::load_file(path)?,
            None => SetupManifest::load(&self.args.path)?,
        };

        let version_file = manifest.version_file_path();
        self.note(&format!("resolving version from {}", version_file.display()));
        let version = resolve_version(&version_file)?;
        self.note(&format!("resolved version {}", version));

        let dependencies = DependencySet::build(
            &manifest.dependencies.install,
            manifest.dependencies.companion.as_deref(),
            &version,
        )?;

        let packages = find_packages(&manifest.root, &manifest.package.exclude_packages)?;
        self.note(&format!("discovered {} package(s)", packages.len()));

        let metadata = assemble(&manifest, version, packages, &dependencies);
        Ok(GeneratorResult {
            metadata,
            version_file,
        })
    }

    fn note(&self, message: &str) {
        if self.args.verbose && !self.args.quiet {
            eprintln!("verpin: {}", message);
        }
    }
}

/// Assembles the final metadata from resolved parts
fn assemble(
    manifest: &SetupManifest,
    version: VersionString,
    packages: Vec<String>,
    dependencies: &DependencySet,
) -> DistMetadata {
    DistMetadata {
        name: manifest.package.name.clone(),
        version,
        author: manifest.package.author.clone(),
        author_email: manifest.package.author_email.clone(),
        license: manifest.package.license.clone(),
        description: manifest.package.description.clone(),
        url: manifest.package.url.clone(),
        classifiers: manifest.package.classifiers.clone(),
        packages,
        requires: dependencies.render(),
        zip_safe: manifest.package.zip_safe,
    }
}
