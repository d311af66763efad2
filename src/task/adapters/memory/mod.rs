//! In-memory adapter implementations.
//!
//! These adapters keep tasks in process memory. They back the unit tests and
//! the server when no database is configured.

mod task;

pub use task::InMemoryTaskRepository;
