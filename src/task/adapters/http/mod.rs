//! HTTP request layer for the task service.
//!
//! Routes map one-to-one onto [`TaskLifecycleService`] operations:
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | `POST` | `/api/tasks` | include |
//! | `GET` | `/api/tasks` | obtain all |
//! | `PUT` | `/api/tasks` | update |
//! | `GET` | `/api/tasks/{id}` | obtain by id |
//! | `DELETE` | `/api/tasks/{id}` | delete |
//! | `PUT` | `/api/tasks/finalize/{id}` | finalize |
//! | `GET` | `/api/tasks/not-finalized` | open tasks |
//! | `GET` | `/api/tasks/finalized` | finalized tasks |
//! | `GET` | `/api/tasks/overdue` | open tasks planned before today |
//! | `GET` | `/api/tasks/not-finalized-between` | open tasks in a date range |
//!
//! Rule violations answer `400` with `{"error": "..."}`; store failures
//! answer `500`.

mod dto;
mod handlers;

pub use dto::{DateRangeQuery, ErrorResponse, TaskBody, TaskResponse};
pub use handlers::ApiError;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::{
    Router,
    routing::{get, put},
};
use mockable::Clock;

/// Builds the task API router around `service`.
pub fn task_router<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/tasks",
            get(handlers::obtain_all::<R, C>)
                .post(handlers::include::<R, C>)
                .put(handlers::update::<R, C>),
        )
        .route(
            "/api/tasks/not-finalized",
            get(handlers::obtain_not_finalized::<R, C>),
        )
        .route("/api/tasks/finalized", get(handlers::obtain_finalized::<R, C>))
        .route("/api/tasks/overdue", get(handlers::obtain_overdue::<R, C>))
        .route(
            "/api/tasks/not-finalized-between",
            get(handlers::obtain_not_finalized_between::<R, C>),
        )
        .route("/api/tasks/finalize/{id}", put(handlers::finalize::<R, C>))
        .route(
            "/api/tasks/{id}",
            get(handlers::obtain_by_id::<R, C>).delete(handlers::delete::<R, C>),
        )
        .with_state(service)
}
