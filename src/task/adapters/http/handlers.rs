//! axum handlers translating HTTP requests into task service calls.

use super::dto::{DateRangeQuery, ErrorResponse, TaskBody, TaskResponse};
use crate::task::{
    domain::{GuardedOperation, Task, TaskDomainError, TaskId},
    ports::TaskRepository,
    services::{TaskErrorKind, TaskLifecycleError, TaskLifecycleService},
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mockable::Clock;
use tracing::error;

/// Failure response carrying a status and a message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        let status = match err.kind() {
            TaskErrorKind::Validation
            | TaskErrorKind::NotFound
            | TaskErrorKind::ImmutableState
            | TaskErrorKind::AlreadyFinalized => StatusCode::BAD_REQUEST,
            TaskErrorKind::Storage => {
                error!(error = %err, "task store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        TaskLifecycleError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;
type ServiceState<R, C> = State<TaskLifecycleService<R, C>>;
type TaskJson = Result<Json<TaskBody>, JsonRejection>;

fn to_responses(tasks: Vec<Task>) -> Json<Vec<TaskResponse>> {
    Json(tasks.into_iter().map(TaskResponse::from).collect())
}

/// `POST /api/tasks`: any `id` in the body is ignored.
pub async fn include<R, C>(
    State(service): ServiceState<R, C>,
    request: TaskJson,
) -> ApiResult<(StatusCode, Json<TaskResponse>)>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = request?;
    let created = service.include(body.into_payload()).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(created))))
}

/// `GET /api/tasks`
pub async fn obtain_all<R, C>(
    State(service): ServiceState<R, C>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Ok(to_responses(service.obtain_all().await?))
}

/// `GET /api/tasks/{id}`: 404 with an empty body when absent.
pub async fn obtain_by_id<R, C>(
    State(service): ServiceState<R, C>,
    Path(raw_id): Path<i64>,
) -> ApiResult<Response>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Ok(id) = TaskId::new(raw_id) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let response = match service.obtain_by_id(id).await? {
        Some(task) => Json(TaskResponse::from(task)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// `PUT /api/tasks`: the body must carry the target `id`.
pub async fn update<R, C>(
    State(service): ServiceState<R, C>,
    request: TaskJson,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(body) = request?;
    if body.completed {
        return Err(ApiError::bad_request(format!(
            "finalized tasks cannot be {}",
            GuardedOperation::Update.past_participle()
        )));
    }
    let raw_id = body
        .id
        .ok_or_else(|| ApiError::bad_request("task id is required"))?;
    let id = TaskId::new(raw_id)?;
    let updated = service.update(id, body.into_payload()).await?;
    Ok(Json(TaskResponse::from(updated)))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete<R, C>(
    State(service): ServiceState<R, C>,
    Path(raw_id): Path<i64>,
) -> ApiResult<StatusCode>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service.delete(TaskId::new(raw_id)?).await?;
    Ok(StatusCode::OK)
}

/// `PUT /api/tasks/finalize/{id}`
pub async fn finalize<R, C>(
    State(service): ServiceState<R, C>,
    Path(raw_id): Path<i64>,
) -> ApiResult<StatusCode>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service.finalize(TaskId::new(raw_id)?).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/tasks/not-finalized`
pub async fn obtain_not_finalized<R, C>(
    State(service): ServiceState<R, C>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Ok(to_responses(service.obtain_not_finalized().await?))
}

/// `GET /api/tasks/finalized`
pub async fn obtain_finalized<R, C>(
    State(service): ServiceState<R, C>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Ok(to_responses(service.obtain_finalized().await?))
}

/// `GET /api/tasks/overdue`: overdue relative to the service clock's today.
pub async fn obtain_overdue<R, C>(
    State(service): ServiceState<R, C>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let today = service.today();
    Ok(to_responses(service.obtain_overdue(today).await?))
}

/// `GET /api/tasks/not-finalized-between?start=YYYY-MM-DD&end=YYYY-MM-DD`
pub async fn obtain_not_finalized_between<R, C>(
    State(service): ServiceState<R, C>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Query(range) = query?;
    Ok(to_responses(
        service
            .obtain_not_finalized_between(range.start, range.end)
            .await?,
    ))
}
