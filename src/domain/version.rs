use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Version triple carried by a release tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Bump version according to bump type.
    ///
    /// Returns `None` if the incremented component would overflow.
    pub fn bump(&self, bump_type: VersionBump) -> Option<Self> {
        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1)?,
            },
        };
        Some(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of the version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    pub const ALL: [VersionBump; 3] = [
        VersionBump::Major,
        VersionBump::Minor,
        VersionBump::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionBump {
    type Err = BumpError;

    /// Kinds are matched exactly; `Major` or ` patch` are not accepted.
    fn from_str(s: &str) -> Result<Self> {
        VersionBump::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                BumpError::usage(format!(
                    "Unknown tag type '{}' (expected major, minor or patch)",
                    s
                ))
            })
    }
}
