use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::sync::Mutex;

/// A call received by [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    DescribeLatestTag,
    CreateTag(String),
}

/// Mock repository for testing without actual git operations
///
/// Records every call so tests can check whether the collaborator was
/// consulted at all.
pub struct MockRepository {
    latest_tag: Option<String>,
    create_output: String,
    create_failure: Option<String>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockRepository {
    /// Create a mock repository with no tags
    pub fn new() -> Self {
        MockRepository {
            latest_tag: None,
            create_output: String::new(),
            create_failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock repository whose latest tag is `tag`
    pub fn with_tag(tag: impl Into<String>) -> Self {
        let mut repo = Self::new();
        repo.latest_tag = Some(tag.into());
        repo
    }

    /// Make `create_tag` succeed but print `output`
    pub fn set_create_output(&mut self, output: impl Into<String>) {
        self.create_output = output.into();
    }

    /// Make `create_tag` fail with `message`
    pub fn fail_create(&mut self, message: impl Into<String>) {
        self.create_failure = Some(message.into());
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().clone()
    }

    /// Tags passed to `create_tag`, in order
    pub fn created_tags(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                MockCall::CreateTag(name) => Some(name.clone()),
                MockCall::DescribeLatestTag => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<MockCall>> {
        // A test that panicked mid-call still leaves a usable log.
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn describe_latest_tag(&self) -> Result<String> {
        self.lock().push(MockCall::DescribeLatestTag);
        self.latest_tag
            .as_ref()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .ok_or_else(|| BumpError::query("fatal: No names found, cannot describe anything."))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.lock().push(MockCall::CreateTag(name.to_string()));

        if let Some(message) = &self.create_failure {
            return Err(BumpError::create(message.clone()));
        }
        if !self.create_output.is_empty() {
            return Err(BumpError::UnexpectedOutput(self.create_output.clone()));
        }
        Ok(())
    }
}
