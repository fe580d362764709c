//! Bump workflow orchestration
//!
//! Keeps the whole read-parse-compute-create sequence free of process exits
//! and printing so it can run against any [Repository]. `main.rs` only maps
//! the outcome to output and an exit status.

use crate::domain::{Tag, VersionBump};
use crate::error::{BumpError, Result};
use crate::git::Repository;

/// Message for a missing or repeated tag type argument
pub const USAGE: &str = "Tag type required (major, minor or patch)";

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args without depending on clap. `kinds` holds the raw
/// positional arguments; validating their count is part of the workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    pub kinds: Vec<String>,

    /// Compute the new tag without creating it
    pub dry_run: bool,
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub old_tag: String,
    pub new_tag: String,

    /// False only for dry runs
    pub created: bool,
}

/// Validate the raw positional arguments into a bump kind.
///
/// Exactly one argument naming `major`, `minor` or `patch` is accepted.
pub fn parse_bump_kind(args: &[String]) -> Result<VersionBump> {
    match args {
        [kind] => kind.parse(),
        _ => Err(BumpError::usage(USAGE)),
    }
}

/// Compute the tag that follows `current` for the given bump kind.
pub fn next_tag(current: &str, kind: VersionBump) -> Result<Tag> {
    let current = Tag::new(current);
    let version = current.version()?;
    tracing::debug!(tag = %current, %version, "parsed current tag");

    let bumped = version.bump(kind).ok_or_else(|| {
        BumpError::structure(
            &current.name,
            format!("{} component cannot be incremented further", kind),
        )
    })?;

    Ok(Tag::from_version(&bumped))
}

/// Bump the latest tag of `repo` and create the result.
///
/// Nothing is created unless the current tag parsed and bumped cleanly.
pub fn bump<R: Repository + ?Sized>(repo: &R, kind: VersionBump) -> Result<BumpOutcome> {
    let (old_tag, new_tag) = plan(repo, kind)?;

    repo.create_tag(&new_tag.name)?;
    tracing::info!(old = %old_tag, new = %new_tag, "created tag");

    Ok(BumpOutcome {
        old_tag,
        new_tag: new_tag.name,
        created: true,
    })
}

/// Main bump workflow
///
/// 1. Validate the tag type argument
/// 2. Read the latest tag
/// 3. Parse and bump it
/// 4. Create the new tag unless this is a dry run
pub fn run_bump_workflow<R: Repository + ?Sized>(
    repo: &R,
    args: &BumpWorkflowArgs,
) -> Result<BumpOutcome> {
    let kind = parse_bump_kind(&args.kinds)?;
    tracing::debug!(%kind, dry_run = args.dry_run, "starting bump");

    if args.dry_run {
        let (old_tag, new_tag) = plan(repo, kind)?;
        return Ok(BumpOutcome {
            old_tag,
            new_tag: new_tag.name,
            created: false,
        });
    }

    bump(repo, kind)
}

fn plan<R: Repository + ?Sized>(repo: &R, kind: VersionBump) -> Result<(String, Tag)> {
    let old_tag = repo.describe_latest_tag()?;
    let new_tag = next_tag(&old_tag, kind)?;
    Ok((old_tag, new_tag))
}
