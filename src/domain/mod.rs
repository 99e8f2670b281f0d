//! Core domain models for verpin
//!
//! This module contains the fundamental types used throughout the application:
//! - Version string type with the development sentinel
//! - Requirement and constraint types for the install list
//! - Distribution metadata structures

mod metadata;
mod requirement;
mod version;

pub use metadata::DistMetadata;
pub use requirement::{Constraint, DependencySet, Requirement};
pub use version::{VersionString, DEV_SENTINEL};
