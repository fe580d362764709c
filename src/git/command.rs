use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Name of the git executable looked up on `PATH`
pub const GIT_BINARY: &str = "git";

/// Repository backed by the `git` command-line tool
///
/// Every call is a blocking subprocess invocation with no timeout.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Operate on the repository containing the process working directory
    pub fn current() -> Self {
        GitCli { workdir: None }
    }

    /// Operate on the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        GitCli {
            workdir: Some(path.as_ref().to_path_buf()),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        tracing::debug!(args = ?args, workdir = ?self.workdir, "running {}", GIT_BINARY);

        let mut cmd = Command::new(GIT_BINARY);
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        tracing::debug!(status = ?output.status.code(), "{} finished", GIT_BINARY);
        Ok(output)
    }
}

impl Repository for GitCli {
    fn describe_latest_tag(&self) -> Result<String> {
        let output = self.run(&["describe", "--tags", "--abbrev=0"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BumpError::query(format!(
                "git describe exited with {}: {}",
                describe_status(&output),
                stderr.trim()
            )));
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if tag.is_empty() {
            return Err(BumpError::query("git describe returned no tag"));
        }

        Ok(tag)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let output = self.run(&["tag", name])?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(BumpError::create(format!(
                "git tag {} exited with {}: {}",
                name,
                describe_status(&output),
                combined.trim()
            )));
        }

        if !combined.is_empty() {
            return Err(BumpError::UnexpectedOutput(combined));
        }

        Ok(())
    }
}

fn describe_status(output: &Output) -> String {
    match output.status.code() {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
