use thiserror::Error;

/// Unified error type for git-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read current tag: {0}")]
    Query(String),

    #[error("Invalid tag structure in repository: {tag} ({reason})")]
    Structure { tag: String, reason: String },

    #[error("Failed to create tag: {0}")]
    Create(String),

    #[error("Unexpected tag output: {0}")]
    UnexpectedOutput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a usage error
    pub fn usage(msg: impl Into<String>) -> Self {
        BumpError::Usage(msg.into())
    }

    /// Create a tag lookup error
    pub fn query(msg: impl Into<String>) -> Self {
        BumpError::Query(msg.into())
    }

    /// Create a structural error naming the offending tag
    pub fn structure(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::Structure {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a tag creation error
    pub fn create(msg: impl Into<String>) -> Self {
        BumpError::Create(msg.into())
    }

    /// Process exit status for this error.
    ///
    /// Usage errors use 2, like clap does for bad arguments.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::Usage(_) => 2,
            _ => 1,
        }
    }
}
