//! Download default platform tags
//!
//! SourceForge marks one file per platform as the default download. Which
//! platforms a release file covers follows from its extension: the zip
//! archive serves Windows, the gzipped tarball everything else.

use std::fmt;
use std::path::Path;

/// Platforms a file can be the default download for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPlatform {
    /// Windows
    Windows,
    /// Linux
    Linux,
    /// macOS
    Mac,
    /// BSD variants
    Bsd,
    /// Solaris
    Solaris,
    /// Anything else
    Others,
}

impl DefaultPlatform {
    /// Tag name as the Release API expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Mac => "mac",
            Self::Bsd => "bsd",
            Self::Solaris => "solaris",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for DefaultPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default platform tags for a release file, from its extension.
///
/// Returns `None` for extensions the file area does not know about; such
/// files are skipped with a warning, never an error.
pub fn defaults_for_extension(file_name: &str) -> Option<&'static [DefaultPlatform]> {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("zip") => Some(&[DefaultPlatform::Windows]),
        Some("gz") => Some(&[
            DefaultPlatform::Linux,
            DefaultPlatform::Mac,
            DefaultPlatform::Bsd,
            DefaultPlatform::Solaris,
            DefaultPlatform::Others,
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_serves_windows() {
        assert_eq!(
            defaults_for_extension("adodb-5.22.4.zip"),
            Some(&[DefaultPlatform::Windows][..])
        );
    }

    #[test]
    fn test_tarball_serves_everything_else() {
        let defaults = defaults_for_extension("adodb-5.22.4.tar.gz").unwrap();
        assert_eq!(
            defaults
                .iter()
                .map(DefaultPlatform::as_str)
                .collect::<Vec<_>>(),
            vec!["linux", "mac", "bsd", "solaris", "others"]
        );
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(defaults_for_extension("adodb-5.22.4.txt"), None);
        assert_eq!(defaults_for_extension("adodb-5.22.4"), None);
    }
}
