// tests/cli_test.rs
mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn git_bump(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-bump").unwrap();
    cmd.current_dir(dir);
    // keep git from walking up into an enclosing repository
    if let Some(parent) = dir.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    cmd
}

#[test]
fn test_help() {
    let dir = tempfile::TempDir::new().unwrap();
    git_bump(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-bump"))
        .stdout(predicate::str::contains("KIND"));
}

#[test]
fn test_version_flag() {
    let dir = tempfile::TempDir::new().unwrap();
    git_bump(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_patch_reports_both_tags() {
    let (dir, repo) = common::repo_with_tag("v1.2.3");

    git_bump(dir.path())
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::diff("Old Tag: v1.2.3\nNew Tag: v1.2.4\n"));

    assert_eq!(common::tag_names(&repo), vec!["v1.2.3", "v1.2.4"]);
}

#[test]
fn test_major_on_short_tag() {
    let (dir, _repo) = common::repo_with_tag("v5");

    git_bump(dir.path())
        .arg("major")
        .assert()
        .success()
        .stdout(predicate::str::diff("Old Tag: v5\nNew Tag: v6.0.0\n"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let (dir, repo) = common::repo_with_tag("v1.2.3");

    git_bump(dir.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Tag type required (major, minor or patch)",
        ));

    assert_eq!(common::tag_names(&repo), vec!["v1.2.3"]);
}

#[test]
fn test_extra_argument_is_usage_error() {
    let (dir, repo) = common::repo_with_tag("v1.2.3");

    git_bump(dir.path())
        .args(["patch", "minor"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Tag type required"));

    assert_eq!(common::tag_names(&repo), vec!["v1.2.3"]);
}

#[test]
fn test_unknown_kind_is_usage_error() {
    let dir = tempfile::TempDir::new().unwrap();

    // no repository here, so a git call would fail with status 1 instead
    git_bump(dir.path())
        .arg("release")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tag type 'release'"));
}

#[test]
fn test_outside_repository_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    git_bump(dir.path())
        .arg("patch")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read current tag"));
}

#[test]
fn test_malformed_tag_names_tag() {
    let (dir, repo) = common::repo_with_tag("v1.2.3.4");

    git_bump(dir.path())
        .arg("minor")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid tag structure"))
        .stderr(predicate::str::contains("v1.2.3.4"));

    assert_eq!(common::tag_names(&repo), vec!["v1.2.3.4"]);
}

#[test]
fn test_dry_run_leaves_repository_untouched() {
    let (dir, repo) = common::repo_with_tag("v1.2.3");

    git_bump(dir.path())
        .args(["--dry-run", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Old Tag: v1.2.3\nNew Tag: v1.3.0\n"))
        .stderr(predicate::str::contains("Dry run: tag v1.3.0 was not created"));

    assert_eq!(common::tag_names(&repo), vec!["v1.2.3"]);
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let (dir, _repo) = common::repo_with_tag("v0.1.0");

    git_bump(dir.path())
        .args(["-vv", "patch"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Old Tag: v0.1.0\nNew Tag: v0.1.1\n"))
        .stderr(predicate::str::contains("created tag"));
}
