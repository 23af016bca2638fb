//! Release artifact discovery
//!
//! A release directory holds one `adodb-X.Y.Z[-suffix].zip` archive plus
//! companion files (tarballs, checksums) that share the `adodb-` prefix.
//! Directory scans sort file names so runs are deterministic across
//! filesystems.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ArtifactError, Result, VersionError};
use crate::version::ReleaseVersion;

/// The release archive found in a working directory
#[derive(Debug, Clone)]
pub struct ReleaseArchive {
    /// Archive file name, e.g. `adodb-5.22.4.zip`
    pub file_name: String,
    /// Version number parsed from the file name
    pub version: ReleaseVersion,
}

/// Locate the release zip in `dir` and parse its version number.
///
/// The first file name (lexical order) shaped like `adodb-*.zip` is taken
/// as the release archive; its name must carry a full version number.
pub fn locate_release_archive(dir: &Path) -> Result<ReleaseArchive> {
    let candidate = sorted_file_names(dir)?
        .into_iter()
        .find(|name| name.starts_with("adodb-") && name.ends_with(".zip"))
        .ok_or_else(|| ArtifactError::ArchiveNotFound(dir.to_path_buf()))?;

    let stem = candidate
        .strip_prefix("adodb-")
        .and_then(|rest| rest.strip_suffix(".zip"))
        .ok_or_else(|| VersionError::InvalidArchiveName(candidate.clone()))?;

    let version = stem
        .parse::<ReleaseVersion>()
        .map_err(|_| VersionError::InvalidArchiveName(candidate.clone()))?;

    debug!(archive = %candidate, version = %version, "located release archive");

    Ok(ReleaseArchive {
        file_name: candidate,
        version,
    })
}

/// File names in `dir` starting with `adodb-`, sorted.
///
/// These are the files whose hosting information gets updated after the
/// transfer.
pub fn release_files(dir: &Path) -> Result<Vec<String>> {
    Ok(sorted_file_names(dir)?
        .into_iter()
        .filter(|name| name.starts_with("adodb-"))
        .collect())
}

/// All visible entry names in `dir`, sorted.
///
/// Hidden entries are skipped, matching the shell glob the transfer
/// sources historically came from.
pub fn working_files(dir: &Path) -> Result<Vec<String>> {
    sorted_file_names(dir)
}

fn sorted_file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "").unwrap();
    }

    #[test]
    fn test_locate_archive() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "adodb-5.22.4.zip");
        touch(&temp, "adodb-5.22.4.tar.gz");
        touch(&temp, "checksums.txt");

        let archive = locate_release_archive(temp.path()).unwrap();
        assert_eq!(archive.file_name, "adodb-5.22.4.zip");
        assert_eq!(archive.version, ReleaseVersion::new(5, 22, 4));
    }

    #[test]
    fn test_locate_archive_with_prerelease() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "adodb-7.0.0-rc.1.zip");

        let archive = locate_release_archive(temp.path()).unwrap();
        assert_eq!(archive.version.to_string(), "7.0.0-rc.1");
    }

    #[test]
    fn test_locate_archive_takes_first_in_lexical_order() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "adodb-9.9.9.zip");
        touch(&temp, "adodb-1.0.0.zip");

        let archive = locate_release_archive(temp.path()).unwrap();
        assert_eq!(archive.file_name, "adodb-1.0.0.zip");
    }

    #[test]
    fn test_archive_not_found() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "README.md");

        let err = locate_release_archive(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Artifact(ArtifactError::ArchiveNotFound(_))
        ));
        assert!(err.to_string().contains("release zip file not found"));
        assert!(err
            .to_string()
            .contains(&temp.path().display().to_string()));
    }

    #[test]
    fn test_archive_with_bad_version_is_rejected() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "adodb-nightly.zip");

        let err = locate_release_archive(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::Version(VersionError::InvalidArchiveName(_))
        ));
        assert!(err.to_string().contains("adodb-nightly.zip"));
    }

    #[test]
    fn test_release_files_filters_on_prefix() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "adodb-5.22.4.zip");
        touch(&temp, "adodb-5.22.4.tar.gz");
        touch(&temp, "README.md");

        let files = release_files(temp.path()).unwrap();
        assert_eq!(files, vec!["adodb-5.22.4.tar.gz", "adodb-5.22.4.zip"]);
    }

    #[test]
    fn test_working_files_sorted_without_hidden_entries() {
        let temp = TempDir::new().unwrap();
        touch(&temp, "b.txt");
        touch(&temp, "a.txt");
        touch(&temp, ".hidden");

        let files = working_files(temp.path()).unwrap();
        assert_eq!(files, vec!["a.txt", "b.txt"]);
    }
}
