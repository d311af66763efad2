//! Service layer for task creation, editing, finalization, and queries.

use crate::task::{
    domain::{GuardedOperation, Task, TaskDetails, TaskDomainError, TaskId, TaskPayload},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Input validation or a lifecycle guard failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Coarse classification of [`TaskLifecycleError`] for boundary mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// Malformed or incomplete input.
    Validation,
    /// The referenced task does not exist.
    NotFound,
    /// The task is finalized and refuses changes.
    ImmutableState,
    /// The task was finalized before.
    AlreadyFinalized,
    /// The store failed.
    Storage,
}

impl TaskLifecycleError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Domain(TaskDomainError::FinalizedTaskImmutable { .. }) => {
                TaskErrorKind::ImmutableState
            }
            Self::Domain(TaskDomainError::AlreadyFinalized(_)) => TaskErrorKind::AlreadyFinalized,
            Self::Domain(_) => TaskErrorKind::Validation,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                TaskErrorKind::NotFound
            }
            Self::Repository(_) => TaskErrorKind::Storage,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Holds no task state between calls: every guarded operation re-reads the
/// stored record before deciding.
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the current UTC calendar date according to the service clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn obtain_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn obtain_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Validates `payload` and stores it as a new active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is missing or
    /// shorter than five characters, or the planned date is missing. Nothing
    /// is persisted in that case.
    pub async fn include(&self, payload: TaskPayload) -> TaskLifecycleResult<Task> {
        let details = TaskDetails::try_from(payload).inspect_err(|err| {
            debug!(error = %err, "rejected task inclusion");
        })?;
        let task = self.repository.store(&details).await?;
        info!(task_id = %task.id(), "task included");
        Ok(task)
    }

    /// Overwrites title, description, and planned date of an active task.
    ///
    /// Completion fields are never touched by this path.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskDomainError::FinalizedTaskImmutable`] when the stored task is
    /// finalized, and a validation error when `payload` fails the inclusion
    /// rules.
    pub async fn update(&self, id: TaskId, payload: TaskPayload) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        let outcome = task
            .ensure_mutable(GuardedOperation::Update)
            .and_then(|()| TaskDetails::try_from(payload))
            .and_then(|details| task.revise(details));
        if let Err(err) = outcome {
            debug!(task_id = %id, error = %err, "rejected task update");
            return Err(err.into());
        }
        let updated = self.repository.update(&task).await?;
        info!(task_id = %id, "task updated");
        Ok(updated)
    }

    /// Removes an active task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskDomainError::FinalizedTaskImmutable`] when it is finalized.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.load(id).await?;
        task.ensure_mutable(GuardedOperation::Delete)
            .inspect_err(|err| debug!(task_id = %id, error = %err, "rejected task deletion"))?;
        self.repository.delete(&task).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Marks an active task as completed today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskDomainError::AlreadyFinalized`] when it was finalized before.
    pub async fn finalize(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let mut task = self.load(id).await?;
        task.finalize(&*self.clock)
            .inspect_err(|err| debug!(task_id = %id, error = %err, "rejected task finalization"))?;
        self.repository.update(&task).await?;
        info!(task_id = %id, completion_date = ?task.completion_date(), "task finalized");
        Ok(())
    }

    /// Returns tasks that are still open.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn obtain_not_finalized(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_completed(false).await?)
    }

    /// Returns finalized tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn obtain_finalized(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_completed(true).await?)
    }

    /// Returns open tasks planned strictly before `reference`.
    ///
    /// Callers usually pass [`Self::today`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn obtain_overdue(&self, reference: NaiveDate) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self
            .repository
            .find_not_completed_planned_before(reference)
            .await?)
    }

    /// Returns open tasks planned within `start..=end`.
    ///
    /// The range is passed through unchecked; a reversed range yields no
    /// tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn obtain_not_finalized_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self
            .repository
            .find_not_completed_planned_between(start, end)
            .await?)
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }
}
