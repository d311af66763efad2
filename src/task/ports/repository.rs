//! Repository port for task persistence and filtered lookup.

use crate::task::domain::{Task, TaskDetails, TaskId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// List queries return tasks ordered by ascending identifier.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Inserts a new active task and returns it with its assigned identifier.
    ///
    /// Identifiers are never reused, even after the task is deleted.
    async fn store(&self, details: &TaskDetails) -> TaskRepositoryResult<Task>;

    /// Overwrites an existing task and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns all tasks whose completion flag equals `completed`.
    async fn find_by_completed(&self, completed: bool) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns open tasks planned strictly before `reference`.
    async fn find_not_completed_planned_before(
        &self,
        reference: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns open tasks planned within `start..=end`.
    ///
    /// A reversed range matches nothing.
    async fn find_not_completed_planned_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A stored record violates a task invariant.
    #[error("corrupt task record {id}: {reason}")]
    CorruptRecord {
        /// Raw identifier of the offending record.
        id: i64,
        /// Description of the violated invariant.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Builds a corrupt-record error.
    pub fn corrupt(id: i64, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            id,
            reason: reason.into(),
        }
    }
}
