//! Error types for Strata.

use std::fmt;

/// Classification of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A single input violates a local precondition.
    InvalidArgument,
    /// Staged changes are inconsistent; nothing was sent to the table.
    ValidationFailed,
    /// The commit mechanism rejected the change; table state is unchanged.
    CommitFailed,
    /// The commit outcome could not be determined.
    CommitStateUnknown,
}

impl ErrorKind {
    /// Get the kebab-case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::ValidationFailed => "validation-failed",
            ErrorKind::CommitFailed => "commit-failed",
            ErrorKind::CommitStateUnknown => "commit-state-unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error with a kind and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationFailed, message)
    }

    pub fn commit_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommitFailed, message)
    }

    pub fn commit_state_unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CommitStateUnknown, message)
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prepend context to the message, keeping the kind.
    pub fn with_context(self, context: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{}: {}", context, self.message),
        }
    }
}

/// Result type for Strata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result of an operation that produces no value.
pub type Status = Result<()>;
