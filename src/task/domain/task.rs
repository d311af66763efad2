//! Task aggregate root and the input shapes that feed it.

use super::{GuardedOperation, TaskDomainError, TaskId, TaskTitle};
use chrono::NaiveDate;
use mockable::Clock;

/// Raw task fields as supplied by a caller.
///
/// Every field is optional so that missing values surface as domain errors
/// rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPayload {
    title: Option<String>,
    long_description: Option<String>,
    planned_completion_date: Option<NaiveDate>,
}

impl TaskPayload {
    /// Creates a payload with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets or clears the title.
    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Sets the long description.
    #[must_use]
    pub fn with_long_description(mut self, description: impl Into<String>) -> Self {
        self.long_description = Some(description.into());
        self
    }

    /// Sets or clears the long description.
    #[must_use]
    pub fn with_optional_long_description(mut self, description: Option<String>) -> Self {
        self.long_description = description;
        self
    }

    /// Sets the planned completion date.
    #[must_use]
    pub const fn with_planned_completion_date(mut self, date: NaiveDate) -> Self {
        self.planned_completion_date = Some(date);
        self
    }

    /// Sets or clears the planned completion date.
    #[must_use]
    pub const fn with_optional_planned_completion_date(mut self, date: Option<NaiveDate>) -> Self {
        self.planned_completion_date = date;
        self
    }
}

/// Validated, user-editable task fields.
///
/// This is also the shape handed to the store for inserts: it has no id, so
/// an insert can never overwrite an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: TaskTitle,
    long_description: Option<String>,
    planned_completion_date: NaiveDate,
}

impl TaskDetails {
    /// Creates details from already validated parts.
    #[must_use]
    pub const fn new(
        title: TaskTitle,
        long_description: Option<String>,
        planned_completion_date: NaiveDate,
    ) -> Self {
        Self {
            title,
            long_description,
            planned_completion_date,
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the long description, if any.
    #[must_use]
    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    /// Returns the planned completion date.
    #[must_use]
    pub const fn planned_completion_date(&self) -> NaiveDate {
        self.planned_completion_date
    }
}

impl TryFrom<TaskPayload> for TaskDetails {
    type Error = TaskDomainError;

    /// Title is checked before the planned date.
    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        let TaskPayload {
            title: raw_title,
            long_description,
            planned_completion_date: raw_planned,
        } = payload;
        let title = TaskTitle::new(raw_title.ok_or(TaskDomainError::MissingTitle)?)?;
        let planned_completion_date =
            raw_planned.ok_or(TaskDomainError::MissingPlannedCompletionDate)?;
        Ok(Self {
            title,
            long_description,
            planned_completion_date,
        })
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    completion_date: Option<NaiveDate>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted editable fields.
    pub details: TaskDetails,
    /// Date the task was finalized, `None` while active.
    pub completion_date: Option<NaiveDate>,
}

impl Task {
    /// Creates an active task for a freshly assigned identifier.
    #[must_use]
    pub const fn new(id: TaskId, details: TaskDetails) -> Self {
        Self {
            id,
            details,
            completion_date: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            completion_date: data.completion_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        self.details.title()
    }

    /// Returns the long description, if any.
    #[must_use]
    pub fn long_description(&self) -> Option<&str> {
        self.details.long_description()
    }

    /// Returns the planned completion date.
    #[must_use]
    pub const fn planned_completion_date(&self) -> NaiveDate {
        self.details.planned_completion_date()
    }

    /// Returns `true` once the task has been finalized.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completion_date.is_some()
    }

    /// Returns the date the task was finalized.
    #[must_use]
    pub const fn completion_date(&self) -> Option<NaiveDate> {
        self.completion_date
    }

    /// Returns `true` when the task is still open and was planned to finish
    /// strictly before `reference`.
    #[must_use]
    pub fn is_overdue_at(&self, reference: NaiveDate) -> bool {
        !self.is_completed() && self.planned_completion_date() < reference
    }

    /// Checks that the task still accepts `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::FinalizedTaskImmutable`] when the task is
    /// finalized.
    pub const fn ensure_mutable(&self, operation: GuardedOperation) -> Result<(), TaskDomainError> {
        if self.is_completed() {
            return Err(TaskDomainError::FinalizedTaskImmutable {
                task_id: self.id,
                operation,
            });
        }
        Ok(())
    }

    /// Replaces title, description, and planned date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::FinalizedTaskImmutable`] when the task is
    /// finalized.
    pub fn revise(&mut self, details: TaskDetails) -> Result<(), TaskDomainError> {
        self.ensure_mutable(GuardedOperation::Update)?;
        self.details = details;
        Ok(())
    }

    /// Marks the task as completed, stamping the clock's current UTC date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyFinalized`] when the task was
    /// finalized before; the completion date is left untouched.
    pub fn finalize(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if self.is_completed() {
            return Err(TaskDomainError::AlreadyFinalized(self.id));
        }
        self.completion_date = Some(clock.utc().date_naive());
        Ok(())
    }
}
