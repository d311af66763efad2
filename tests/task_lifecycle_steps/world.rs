//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{TestClock, date};
use chrono::NaiveDate;
use rstest::fixture;
use tarefas::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, TestClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    /// Clock shared with the service.
    pub clock: Arc<TestClock>,
    /// Service under test.
    pub service: TestTaskService,
    /// Most recently included task.
    pub current_task: Option<TaskId>,
    /// Result of the last operation that may fail.
    pub last_result: Option<Result<(), TaskLifecycleError>>,
    /// Tasks returned by the last listing.
    pub listed: Vec<Task>,
}

impl TaskLifecycleWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(TestClock::on(date(2025, 1, 1)));
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&clock),
        );

        Self {
            clock,
            service,
            current_task: None,
            last_result: None,
            listed: Vec::new(),
        }
    }

    /// Returns the identifier of the task the scenario works on.
    ///
    /// # Errors
    ///
    /// Returns an error when no task was included yet.
    pub fn current_task(&self) -> Result<TaskId, eyre::Report> {
        self.current_task
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses an ISO `YYYY-MM-DD` date from step text.
///
/// # Errors
///
/// Returns an error when the text is not a valid date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date {raw:?} in scenario: {err}"))
}
