//! Error types for task domain validation and lifecycle guards.

use super::TaskId;
use std::fmt;
use thiserror::Error;

/// Mutations that a finalized task refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardedOperation {
    /// Overwriting title, description, or planned date.
    Update,
    /// Removing the task record.
    Delete,
}

impl GuardedOperation {
    /// Returns the past participle used in error messages.
    #[must_use]
    pub const fn past_participle(self) -> &'static str {
        match self {
            Self::Update => "modified",
            Self::Delete => "deleted",
        }
    }
}

impl fmt::Display for GuardedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update => f.write_str("update"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Errors returned while validating task input or guarding lifecycle changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The payload carries no title.
    #[error("task title is required and must contain at least 5 characters")]
    MissingTitle,

    /// The title is shorter than the accepted minimum.
    #[error("task title must contain at least {minimum} characters, got {length}")]
    TitleTooShort {
        /// Number of characters supplied.
        length: usize,
        /// Minimum number of characters accepted.
        minimum: usize,
    },

    /// The payload carries no planned completion date.
    #[error("planned completion date is required")]
    MissingPlannedCompletionDate,

    /// The identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The task is finalized and can no longer be changed or removed.
    #[error("finalized tasks cannot be {}", .operation.past_participle())]
    FinalizedTaskImmutable {
        /// Finalized task identifier.
        task_id: TaskId,
        /// Rejected operation.
        operation: GuardedOperation,
    },

    /// The task was finalized before.
    #[error("task {0} is already finalized")]
    AlreadyFinalized(TaskId),
}

impl TaskDomainError {
    /// Returns `true` for errors caused by malformed input rather than by the
    /// persisted task state.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingTitle
                | Self::TitleTooShort { .. }
                | Self::MissingPlannedCompletionDate
                | Self::InvalidTaskId(_)
        )
    }
}
