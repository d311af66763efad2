//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
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
    /// Completion date, set only when `completed` is true.
    pub completion_date: Option<NaiveDate>,
}

/// Insert model for task records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional long description.
    pub long_description: Option<String>,
    /// Planned completion date.
    pub planned_completion_date: NaiveDate,
    /// Completion flag, always false on insert.
    pub completed: bool,
}

/// Full overwrite of the mutable task columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional long description.
    pub long_description: Option<String>,
    /// Planned completion date.
    pub planned_completion_date: NaiveDate,
    /// Completion flag.
    pub completed: bool,
    /// Completion date.
    pub completion_date: Option<NaiveDate>,
}
