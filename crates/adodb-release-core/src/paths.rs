//! SourceForge directory naming rules

use crate::version::ReleaseVersion;

/// Return the SourceForge target directory for a release.
///
/// The result is relative to the project file root: `{base}/{sub}`, with
/// - base: `adodb-php5-only` for ADOdb version 5, `adodbX` for newer
///   versions (where X is the major version number);
/// - sub: `adodb-X.Y` (patch number and pre-release suffix discarded).
///
/// The layout is a fixed historical convention of the project's download
/// area; every release version funnels through it.
pub fn target_directory(version: &ReleaseVersion) -> String {
    let base = if version.major == 5 {
        "adodb-php5-only".to_string()
    } else {
        format!("adodb{}", version.major)
    };

    format!("{}/adodb-{}", base, version.short())
}
