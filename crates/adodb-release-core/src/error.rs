//! Error types for the release upload tool

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for release upload operations
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Artifact discovery errors
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Version string does not match the release grammar
    #[error("invalid version '{0}': expected 3 groups of digits separated by periods, with an optional -alpha.N/-beta.N/-rc.N suffix")]
    InvalidFormat(String),

    /// Archive file name does not carry a parsable version
    #[error("unable to extract version number from '{0}': only 3 groups of digits separated by periods are allowed")]
    InvalidArchiveName(String),
}

/// Artifact discovery errors
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No release zip in the working directory
    #[error("release zip file not found in '{0}'")]
    ArchiveNotFound(PathBuf),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Release directory does not exist
    #[error("release directory not found at {0}")]
    ReleasePathNotFound(PathBuf),

    /// Current user could not be determined
    #[error("unable to determine current user, specify one with --user")]
    UnknownUsername,
}
