//! Shared test helpers for in-memory repository integration tests.

use crate::test_helpers::{TestClock, date};
use chrono::NaiveDate;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tarefas::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskPayload},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use tokio::runtime::Runtime;

/// Service wired to an in-memory store and a test clock.
pub type MemoryService = TaskLifecycleService<InMemoryTaskRepository, TestClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a service over `repo` whose clock reads 2025-02-01.
#[fixture]
pub fn service(repo: InMemoryTaskRepository) -> MemoryService {
    TaskLifecycleService::new(Arc::new(repo), Arc::new(TestClock::on(date(2025, 2, 1))))
}

/// Builds a complete payload.
#[must_use]
pub fn payload(title: &str, planned: NaiveDate) -> TaskPayload {
    TaskPayload::new(title).with_planned_completion_date(planned)
}

/// Includes one task per `(title, planned)` pair, in order.
///
/// # Errors
///
/// Returns the first inclusion failure.
pub fn include_all(
    rt: &Runtime,
    service: &MemoryService,
    tasks: &[(&str, NaiveDate)],
) -> Result<Vec<Task>, TaskLifecycleError> {
    tasks
        .iter()
        .map(|&(title, planned)| rt.block_on(service.include(payload(title, planned))))
        .collect()
}
