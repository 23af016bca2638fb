//! ADOdb Release Core - shared types for the release upload tool
//!
//! This crate provides the run configuration, error types, the release
//! version grammar, the SourceForge directory naming rules, and release
//! artifact discovery used by the upload stages.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod paths;
pub mod version;

pub use artifacts::{locate_release_archive, release_files, working_files, ReleaseArchive};
pub use config::{default_username, RunConfig};
pub use error::{ArtifactError, ConfigError, ReleaseError, Result, VersionError};
pub use paths::target_directory;
pub use version::{Prerelease, PrereleasePhase, ReleaseVersion};
