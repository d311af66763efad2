//! Domain model for task tracking.
//!
//! Tasks carry a validated title, an optional long description, a planned
//! completion date, and a one-way completion stamp. All guards that protect
//! finalized tasks live here, outside any infrastructure concern.

mod error;
mod ids;
mod task;

pub use error::{GuardedOperation, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskDetails, TaskPayload};
