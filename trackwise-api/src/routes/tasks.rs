/// Task endpoints
///
/// - `GET    /api/tasks` - Active (unarchived) tasks
/// - `GET    /api/tasks/archived` - Archived tasks
/// - `POST   /api/tasks` - Create a task
/// - `PUT    /api/tasks/:id` - Partial update
/// - `PUT    /api/tasks/:id/archive` - Archive (irreversible)
/// - `DELETE /api/tasks/:id` - Delete

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{RecordId, ValidatedJson},
    routes::SuccessResponse,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use trackwise_shared::models::task::{CreateTask, Task, TaskFilter, UpdateTask, DEFAULT_STATUS};
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200, message = "Text must be 1-200 characters"))]
    pub text: String,

    /// Defaults to "todo"
    #[validate(length(min = 1, max = 20, message = "Status must be 1-20 characters"))]
    pub status: Option<String>,
}

/// Update task request; absent or null fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 200, message = "Text must be 1-200 characters"))]
    pub text: Option<String>,

    #[validate(length(min = 1, max = 20, message = "Status must be 1-20 characters"))]
    pub status: Option<String>,
}

/// Task as returned by create and update
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: i64,
    pub text: String,
    pub status: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            status: task.status,
        }
    }
}

/// Task as returned by the listings
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListEntry {
    pub id: i64,
    pub text: String,
    pub status: String,
    pub archived: bool,
}

impl From<Task> for TaskListEntry {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            text: task.text,
            status: task.status,
            archived: task.archived,
        }
    }
}

/// Archive response
#[derive(Debug, Serialize, Deserialize)]
pub struct ArchiveResponse {
    pub id: i64,
    pub archived: bool,
}

async fn list_by(state: &AppState, filter: TaskFilter) -> ApiResult<Json<Vec<TaskListEntry>>> {
    let tasks = state.tasks.list(filter).await?;
    Ok(Json(tasks.into_iter().map(TaskListEntry::from).collect()))
}

/// Lists tasks that have not been archived
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<TaskListEntry>>> {
    list_by(&state, TaskFilter::Active).await
}

/// Lists archived tasks
pub async fn list_archived_tasks(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TaskListEntry>>> {
    list_by(&state, TaskFilter::Archived).await
}

/// Creates a task
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks
/// Content-Type: application/json
///
/// { "text": "buy milk" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "text": "buy milk", "status": "todo" }
/// ```
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state
        .tasks
        .create(CreateTask {
            text: req.text,
            status: req.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
        .await?;

    tracing::info!(task_id = task.id, status = %task.status, "Created task");
    Ok(Json(task.into()))
}

/// Updates the supplied fields of a task
///
/// # Errors
///
/// - `400 Bad Request`: Invalid field
/// - `404 Not Found`: No task with this id
pub async fn update_task(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(req): ValidatedJson<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task = state
        .tasks
        .update(
            id,
            UpdateTask {
                text: req.text,
                status: req.status,
            },
        )
        .await?;

    tracing::info!(task_id = id, "Updated task");
    Ok(Json(task.into()))
}

/// Archives a task
///
/// Archiving an already archived task succeeds and changes nothing.
///
/// # Errors
///
/// - `404 Not Found`: No task with this id
pub async fn archive_task(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<ArchiveResponse>> {
    let task = state.tasks.archive(id).await?;

    tracing::info!(task_id = id, "Archived task");
    Ok(Json(ArchiveResponse {
        id: task.id,
        archived: task.archived,
    }))
}

/// Deletes a task, archived or not
pub async fn delete_task(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<SuccessResponse>> {
    state.tasks.delete(id).await?;
    tracing::info!(task_id = id, "Deleted task");
    Ok(Json(SuccessResponse::ok()))
}
