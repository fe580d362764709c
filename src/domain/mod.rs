//! Domain logic - tag parsing and version arithmetic, independent of git

pub mod tag;
pub mod version;

pub use tag::{Tag, MAX_COMPONENTS, TAG_PREFIX, TAG_SEPARATOR};
pub use version::{Version, VersionBump};
