// Shared fixtures for tests that need a real repository on disk.
#![allow(dead_code)]

use git2::{Oid, Repository};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary repository with configured identity and no commits
pub fn init_repo() -> (TempDir, Repository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    (temp_dir, repo)
}

/// Commit a change to README.md on HEAD and return the new commit id
pub fn commit(repo: &Repository, message: &str) -> Oid {
    let workdir = repo.workdir().expect("Repository has no workdir");
    let content_path = workdir.join("README.md");
    let previous = fs::read_to_string(&content_path).unwrap_or_default();
    fs::write(&content_path, format!("{}{}\n", previous, message))
        .expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("README.md"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let signature = repo.signature().expect("Could not get sig");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .expect("Could not create commit")
}

/// Lightweight tag on a commit
pub fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("Could not find object");
    repo.tag_lightweight(name, &object, false)
        .expect("Could not create tag");
}

/// Repository with one commit tagged `tag_name`
pub fn repo_with_tag(tag_name: &str) -> (TempDir, Repository) {
    let (dir, repo) = init_repo();
    let oid = commit(&repo, "Initial commit");
    tag(&repo, tag_name, oid);
    (dir, repo)
}

pub fn tag_names(repo: &Repository) -> Vec<String> {
    let tags = repo.tag_names(None).expect("Could not list tags");
    let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
    names.sort();
    names
}
