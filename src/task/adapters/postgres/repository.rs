//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDetails, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::debug;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema migration creating the `tasks` table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2025-01-01-000000_create_tasks/up.sql");

/// Builds a connection pool for `database_url` holding at most `max_size`
/// connections.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the pool cannot open its
/// initial connections.
pub fn build_pool(database_url: &str, max_size: u32) -> TaskRepositoryResult<TaskPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(TaskRepositoryError::persistence)
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `tasks` table and its index when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the migration fails.
    pub async fn apply_migrations(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await?;
        debug!("task schema migration applied");
        Ok(())
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }

    async fn load_where<F>(&self, query: F) -> TaskRepositoryResult<Vec<Task>>
    where
        F: FnOnce(&mut PgConnection) -> QueryResult<Vec<TaskRow>> + Send + 'static,
    {
        self.run_blocking(move |connection| {
            query(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(row_to_task)
                .collect()
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.load_where(|connection| {
            tasks::table
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn store(&self, details: &TaskDetails) -> TaskRepositoryResult<Task> {
        let new_row = NewTaskRow {
            title: details.title().as_str().to_owned(),
            long_description: details.long_description().map(str::to_owned),
            planned_completion_date: details.planned_completion_date(),
            completed: false,
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(task_id.value()))
                .set(&changeset)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(task_id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.find(task_id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if removed == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_completed(&self, completed: bool) -> TaskRepositoryResult<Vec<Task>> {
        self.load_where(move |connection| {
            tasks::table
                .filter(tasks::completed.eq(completed))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_not_completed_planned_before(
        &self,
        reference: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.load_where(move |connection| {
            tasks::table
                .filter(tasks::completed.eq(false))
                .filter(tasks::planned_completion_date.lt(reference))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }

    async fn find_not_completed_planned_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.load_where(move |connection| {
            tasks::table
                .filter(tasks::completed.eq(false))
                .filter(tasks::planned_completion_date.between(start, end))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load(connection)
        })
        .await
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        long_description: task.long_description().map(str::to_owned),
        planned_completion_date: task.planned_completion_date(),
        completed: task.is_completed(),
        completion_date: task.completion_date(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id: raw_id,
        title,
        long_description,
        planned_completion_date,
        completed,
        completion_date,
    } = row;

    let id = TaskId::new(raw_id)
        .map_err(|err| TaskRepositoryError::corrupt(raw_id, err.to_string()))?;
    let persisted_title =
        TaskTitle::new(title).map_err(|err| TaskRepositoryError::corrupt(raw_id, err.to_string()))?;
    if completed != completion_date.is_some() {
        return Err(TaskRepositoryError::corrupt(
            raw_id,
            "completion flag and completion date disagree",
        ));
    }

    let data = PersistedTaskData {
        id,
        details: TaskDetails::new(persisted_title, long_description, planned_completion_date),
        completion_date,
    };
    Ok(Task::from_persisted(data))
}
