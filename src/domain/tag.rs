use crate::domain::Version;
use crate::error::{BumpError, Result};

/// Literal character every release tag starts with
pub const TAG_PREFIX: char = 'v';

/// Separator between version components
pub const TAG_SEPARATOR: char = '.';

/// Maximum number of components a tag may carry
pub const MAX_COMPONENTS: usize = 3;

/// Represents a release tag such as `v1.2.3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Build the canonical tag for a version (e.g., Version(1,2,3) -> "v1.2.3")
    pub fn from_version(version: &Version) -> Self {
        Tag {
            name: format!(
                "{prefix}{major}{sep}{minor}{sep}{patch}",
                prefix = TAG_PREFIX,
                major = version.major,
                minor = version.minor,
                patch = version.patch,
                sep = TAG_SEPARATOR
            ),
        }
    }

    /// Version portion of the tag with one literal prefix removed.
    ///
    /// Only a single `v` is stripped, so `vv1.2.3` keeps its second `v`.
    /// A tag without the prefix is returned as-is.
    pub fn version_part(&self) -> &str {
        self.name.strip_prefix(TAG_PREFIX).unwrap_or(&self.name)
    }

    /// Parse the tag into a version.
    ///
    /// Accepts one to three components; missing minor and patch are zero.
    pub fn version(&self) -> Result<Version> {
        let parts: Vec<&str> = self.version_part().split(TAG_SEPARATOR).collect();
        if parts.len() > MAX_COMPONENTS {
            return Err(BumpError::structure(
                &self.name,
                format!(
                    "expected at most {} components, found {}",
                    MAX_COMPONENTS,
                    parts.len()
                ),
            ));
        }

        let component = |index: usize| -> Result<u64> {
            match parts.get(index) {
                Some(token) => parse_component(token).ok_or_else(|| {
                    BumpError::structure(
                        &self.name,
                        format!("'{}' is not a non-negative integer", token),
                    )
                }),
                None => Ok(0),
            }
        };

        Ok(Version::new(component(0)?, component(1)?, component(2)?))
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Digits only: no sign, no whitespace, not empty.
fn parse_component(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u64>().ok()
}
