//! Run configuration
//!
//! Command-line options are resolved once into an immutable [`RunConfig`]
//! that the upload stages receive by reference.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Resolved options for a single upload run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// SourceForge account used for the transfer
    pub username: String,
    /// Directory holding the release files
    pub release_path: PathBuf,
    /// Print commands and request URLs instead of executing them
    pub dry_run: bool,
    /// Leave the transfer stage out, only update file information
    pub skip_upload: bool,
}

impl RunConfig {
    /// Build the configuration for a run.
    ///
    /// `username` falls back to the current OS user and `release_path` to
    /// the current directory. An explicit release path must exist.
    pub fn new(
        username: Option<String>,
        release_path: Option<PathBuf>,
        dry_run: bool,
        skip_upload: bool,
    ) -> Result<Self> {
        let username = match username {
            Some(name) => name,
            None => default_username()?,
        };

        let release_path = match release_path {
            Some(path) => {
                if !path.is_dir() {
                    return Err(ConfigError::ReleasePathNotFound(path).into());
                }
                path
            }
            None => env::current_dir()?,
        };

        Ok(Self {
            username,
            release_path,
            dry_run,
            skip_upload,
        })
    }
}

/// Name of the current OS user
#[cfg(unix)]
pub fn default_username() -> Result<String> {
    users::get_current_username()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ConfigError::UnknownUsername.into())
}

/// Name of the current OS user
#[cfg(not(unix))]
pub fn default_username() -> Result<String> {
    env::var("USERNAME").map_err(|_| ConfigError::UnknownUsername.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_values() {
        let temp = TempDir::new().unwrap();
        let config = RunConfig::new(
            Some("dregad".to_string()),
            Some(temp.path().to_path_buf()),
            true,
            false,
        )
        .unwrap();

        assert_eq!(config.username, "dregad");
        assert_eq!(config.release_path, temp.path());
        assert!(config.dry_run);
        assert!(!config.skip_upload);
    }

    #[test]
    fn test_release_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-dir");

        let err = RunConfig::new(Some("dregad".to_string()), Some(missing), false, false)
            .unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Config(ConfigError::ReleasePathNotFound(_))
        ));
    }

    #[test]
    fn test_release_path_defaults_to_current_dir() {
        let config = RunConfig::new(Some("dregad".to_string()), None, false, false).unwrap();
        assert_eq!(config.release_path, env::current_dir().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_default_username_resolves() {
        assert!(!default_username().unwrap().is_empty());
    }
}
