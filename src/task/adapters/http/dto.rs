//! JSON request and response bodies for the task HTTP API.

use crate::task::domain::{Task, TaskPayload};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task body accepted by create and update requests.
///
/// Mirrors the response shape so clients can send back what they read.
/// Completion fields are accepted but never copied onto a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    /// Target task on update; ignored on create.
    #[serde(default)]
    pub id: Option<i64>,
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional long description.
    #[serde(default)]
    pub long_description: Option<String>,
    /// Planned completion date (`YYYY-MM-DD`).
    #[serde(default)]
    pub planned_completion_date: Option<NaiveDate>,
    /// Completion flag as seen by the client.
    #[serde(default)]
    pub completed: bool,
    /// Completion date as seen by the client.
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
}

impl TaskBody {
    /// Extracts the editable fields.
    #[must_use]
    pub fn into_payload(self) -> TaskPayload {
        TaskPayload::default()
            .with_title(self.title)
            .with_optional_long_description(self.long_description)
            .with_optional_planned_completion_date(self.planned_completion_date)
    }
}

/// Task representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Optional long description.
    pub long_description: Option<String>,
    /// Planned completion date.
    pub planned_completion_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
    /// Date the task was finalized.
    pub completion_date: Option<NaiveDate>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            long_description: task.long_description().map(str::to_owned),
            planned_completion_date: task.planned_completion_date(),
            completed: task.is_completed(),
            completion_date: task.completion_date(),
        }
    }
}

/// Error body returned with every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure message.
    pub error: String,
}

/// Query string for the planned-date range listing.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DateRangeQuery {
    /// First planned date included.
    pub start: NaiveDate,
    /// Last planned date included.
    pub end: NaiveDate,
}
