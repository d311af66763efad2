//! In-memory repository for task storage.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskDetails, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers start at 1 and increase monotonically; deleted identifiers are
/// never handed out again.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn filtered(&self, predicate: impl Fn(&Task) -> bool) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|&task| predicate(task))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.filtered(|_| true)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn store(&self, details: &TaskDetails) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other("task id space exhausted"))
        })?;
        let id = TaskId::new(next).map_err(TaskRepositoryError::persistence)?;
        let task = Task::new(id, details.clone());
        state.last_id = next;
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(task.clone())
    }

    async fn delete(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&task.id())
            .map(drop)
            .ok_or(TaskRepositoryError::NotFound(task.id()))
    }

    async fn find_by_completed(&self, completed: bool) -> TaskRepositoryResult<Vec<Task>> {
        self.filtered(|task| task.is_completed() == completed)
    }

    async fn find_not_completed_planned_before(
        &self,
        reference: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.filtered(|task| task.is_overdue_at(reference))
    }

    async fn find_not_completed_planned_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.filtered(|task| {
            let planned = task.planned_completion_date();
            !task.is_completed() && start <= planned && planned <= end
        })
    }
}
