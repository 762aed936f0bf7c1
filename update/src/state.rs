//! Commit outcome tracking.

use std::fmt;
use strata_core::{ErrorKind, Status};

/// Outcome of the most recent `commit()` on a staged update.
///
/// A failed outcome is not final for the update itself: the caller may stage
/// more changes and commit again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitState {
    /// No commit has been attempted.
    #[default]
    Pending,
    /// Staged changes failed validation and were never sent.
    Invalid,
    /// The change was committed and the table refreshed.
    Committed,
    /// The commit mechanism rejected the change.
    Rejected,
    /// The commit outcome is unknown.
    Unknown,
}

impl CommitState {
    /// Classify the status returned by a commit attempt.
    pub fn from_status(status: &Status) -> Self {
        match status {
            Ok(()) => CommitState::Committed,
            Err(err) => match err.kind() {
                ErrorKind::InvalidArgument | ErrorKind::ValidationFailed => CommitState::Invalid,
                ErrorKind::CommitFailed => CommitState::Rejected,
                ErrorKind::CommitStateUnknown => CommitState::Unknown,
            },
        }
    }

    /// Check if the last attempt reached the commit mechanism.
    pub fn was_sent(&self) -> bool {
        matches!(
            self,
            CommitState::Committed | CommitState::Rejected | CommitState::Unknown
        )
    }
}

impl fmt::Display for CommitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommitState::Pending => "pending",
            CommitState::Invalid => "invalid",
            CommitState::Committed => "committed",
            CommitState::Rejected => "rejected",
            CommitState::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
