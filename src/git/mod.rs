//! Git operations abstraction layer
//!
//! The bump workflow only needs two things from version control: the most
//! recent tag and a way to create a new one. Both are expressed by the
//! [Repository] trait so the workflow can run against the real `git` binary
//! ([command::GitCli]) or an in-memory fake ([mock::MockRepository]).
//!
//! ```rust
//! # use git_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_bump::Result<()> {
//! let current = repo.describe_latest_tag()?;
//! repo.create_tag("v1.0.1")?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;

pub use command::GitCli;
pub use mock::{MockCall, MockRepository};

use crate::error::Result;

/// Version-control collaborator used by the bump workflow
///
/// Implementations map their failures to [crate::error::BumpError]:
/// lookup failures to `Query`, creation failures to `Create` or
/// `UnexpectedOutput`.
pub trait Repository: Send + Sync {
    /// Name of the most recent tag reachable from the current position
    ///
    /// The returned name is trimmed of surrounding whitespace. An empty
    /// answer is an error.
    fn describe_latest_tag(&self) -> Result<String>;

    /// Create a tag named `name` at the current position
    ///
    /// Fails if the underlying tool errors or reports anything on success.
    fn create_tag(&self, name: &str) -> Result<()>;
}
