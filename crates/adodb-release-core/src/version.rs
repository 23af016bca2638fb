//! Release version grammar
//!
//! Release archives carry a dotted three-part version number with an
//! optional pre-release suffix (`alpha`, `beta` or `rc` plus a sequence
//! number), e.g. `5.22.4` or `7.0.0-beta.2`. This is deliberately narrower
//! than SemVer: arbitrary pre-release identifiers and build metadata are
//! rejected.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::VersionError;

/// Pre-release phase labels accepted in version suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrereleasePhase {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    Rc,
}

impl PrereleasePhase {
    /// Label as it appears in archive file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Rc => "rc",
        }
    }
}

impl fmt::Display for PrereleasePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-release suffix: phase label plus sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prerelease {
    /// Release phase
    pub phase: PrereleasePhase,
    /// Sequence number within the phase
    pub number: u64,
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.phase, self.number)
    }
}

/// Version number of a release archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    /// Major version
    pub major: u64,
    /// Minor version
    pub minor: u64,
    /// Patch version
    pub patch: u64,
    /// Pre-release suffix, absent for final releases
    pub prerelease: Option<Prerelease>,
}

impl ReleaseVersion {
    /// Create a new final-release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Set the pre-release suffix
    pub fn with_prerelease(mut self, phase: PrereleasePhase, number: u64) -> Self {
        self.prerelease = Some(Prerelease { phase, number });
        self
    }

    /// Short version `major.minor`, patch and pre-release suffix discarded
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for ReleaseVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-(alpha|beta|rc)\.(\d+))?$").unwrap();
        let caps = pattern
            .captures(s)
            .ok_or_else(|| VersionError::InvalidFormat(s.to_string()))?;

        let number = |idx: usize| {
            caps[idx]
                .parse::<u64>()
                .map_err(|_| VersionError::InvalidFormat(s.to_string()))
        };

        let prerelease = match caps.get(4) {
            Some(phase) => Some(Prerelease {
                phase: match phase.as_str() {
                    "alpha" => PrereleasePhase::Alpha,
                    "beta" => PrereleasePhase::Beta,
                    _ => PrereleasePhase::Rc,
                },
                number: number(5)?,
            }),
            None => None,
        };

        Ok(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            prerelease,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let v: ReleaseVersion = "5.22.4".parse().unwrap();

        assert_eq!(v.major, 5);
        assert_eq!(v.minor, 22);
        assert_eq!(v.patch, 4);
        assert!(v.prerelease.is_none());
    }

    #[test]
    fn test_parse_with_prerelease() {
        let v: ReleaseVersion = "7.0.0-beta.2".parse().unwrap();

        assert_eq!(v.major, 7);
        assert_eq!(
            v.prerelease,
            Some(Prerelease {
                phase: PrereleasePhase::Beta,
                number: 2
            })
        );
    }

    #[test]
    fn test_parse_all_phases() {
        for (input, phase) in [
            ("1.2.3-alpha.1", PrereleasePhase::Alpha),
            ("1.2.3-beta.9", PrereleasePhase::Beta),
            ("1.2.3-rc.10", PrereleasePhase::Rc),
        ] {
            let v: ReleaseVersion = input.parse().unwrap();
            assert_eq!(v.prerelease.unwrap().phase, phase);
        }
    }

    #[test]
    fn test_reject_two_groups() {
        assert!("5.22".parse::<ReleaseVersion>().is_err());
    }

    #[test]
    fn test_reject_four_groups() {
        assert!("1.2.3.4".parse::<ReleaseVersion>().is_err());
    }

    #[test]
    fn test_reject_unknown_phase() {
        assert!("1.2.3-gamma.1".parse::<ReleaseVersion>().is_err());
    }

    #[test]
    fn test_reject_suffix_without_number() {
        assert!("1.2.3-beta".parse::<ReleaseVersion>().is_err());
        assert!("1.2.3-beta.".parse::<ReleaseVersion>().is_err());
    }

    #[test]
    fn test_reject_trailing_garbage() {
        assert!("1.2.3-rc.1x".parse::<ReleaseVersion>().is_err());
        assert!("v1.2.3".parse::<ReleaseVersion>().is_err());
    }

    #[test]
    fn test_display() {
        let v = ReleaseVersion::new(5, 22, 4);
        assert_eq!(v.to_string(), "5.22.4");

        let v = ReleaseVersion::new(7, 0, 0).with_prerelease(PrereleasePhase::Rc, 1);
        assert_eq!(v.to_string(), "7.0.0-rc.1");
    }

    #[test]
    fn test_short_discards_patch_and_suffix() {
        let v: ReleaseVersion = "5.22.4".parse().unwrap();
        assert_eq!(v.short(), "5.22");

        let v: ReleaseVersion = "7.0.3-beta.2".parse().unwrap();
        assert_eq!(v.short(), "7.0");
    }
}
