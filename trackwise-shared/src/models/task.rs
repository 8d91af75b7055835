/// Task model and repository
///
/// Tasks carry free-form text and a status string. Archiving is a one-way
/// soft delete: no operation clears `archived` once it is set, and archived
/// tasks only show up through [`TaskFilter::Archived`].
///
/// # Lifecycle
///
/// ```text
/// active ──archive──▶ archived
///   │                    │
///   └──────delete────────┴──▶ (gone)
/// ```
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY,
///     text VARCHAR(200) NOT NULL,
///     status VARCHAR(20) NOT NULL DEFAULT 'todo',
///     archived BOOLEAN NOT NULL DEFAULT 0
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use trackwise_shared::models::task::{CreateTask, SqliteTaskRepository, TaskFilter, TaskRepository};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
/// let tasks = SqliteTaskRepository::new(pool);
///
/// let task = tasks.create(CreateTask::new("buy milk")).await?;
/// assert_eq!(task.status, "todo");
///
/// tasks.archive(task.id).await?;
/// assert!(tasks.list(TaskFilter::Active).await?.is_empty());
/// # Ok(())
/// # }
/// ```

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

const RESOURCE: &str = "task";

/// Status given to tasks created without one
pub const DEFAULT_STATUS: &str = "todo";

/// Task record
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Task {
    /// Generated surrogate key
    pub id: i64,

    /// Task description
    pub text: String,

    /// Free-form status label (e.g. "todo", "doing", "done")
    pub status: String,

    /// Soft-delete flag; never reset once true
    pub archived: bool,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Task description
    pub text: String,

    /// Initial status (defaults to "todo")
    pub status: String,
}

impl CreateTask {
    /// Task with the default status
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: default_status(),
        }
    }
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Partial update for a task
///
/// Only `Some` fields are written; the rest keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    /// New description
    pub text: Option<String>,

    /// New status
    pub status: Option<String>,
}

/// Which tasks a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Tasks that have not been archived
    #[default]
    Active,

    /// Archived tasks only
    Archived,
}

impl TaskFilter {
    fn archived(self) -> bool {
        matches!(self, TaskFilter::Archived)
    }
}

/// Storage operations for tasks
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a task (never archived)
    async fn create(&self, data: CreateTask) -> StoreResult<Task>;

    /// Fetches a task by id, archived or not
    async fn get(&self, id: i64) -> StoreResult<Task>;

    /// Lists tasks matching `filter` in id order
    async fn list(&self, filter: TaskFilter) -> StoreResult<Vec<Task>>;

    /// Applies a partial update
    async fn update(&self, id: i64, data: UpdateTask) -> StoreResult<Task>;

    /// Marks a task archived. Archiving an archived task is a no-op.
    async fn archive(&self, id: i64) -> StoreResult<Task>;

    /// Deletes a task by id
    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// [`TaskRepository`] backed by a SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a repository over `pool`
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn not_found(id: i64) -> StoreError {
        StoreError::NotFound {
            resource: RESOURCE,
            id,
        }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, data: CreateTask) -> StoreResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (text, status)
            VALUES (?, ?)
            RETURNING id, text, status, archived
            "#,
        )
        .bind(data.text)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await?;

        debug!(task_id = task.id, status = %task.status, "Inserted task");
        Ok(task)
    }

    async fn get(&self, id: i64) -> StoreResult<Task> {
        sqlx::query_as::<_, Task>("SELECT id, text, status, archived FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self, filter: TaskFilter) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, text, status, archived
            FROM tasks
            WHERE archived = ?
            ORDER BY id
            "#,
        )
        .bind(filter.archived())
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update(&self, id: i64, data: UpdateTask) -> StoreResult<Task> {
        // COALESCE keeps omitted fields in the same statement, no read-modify-write
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET text = COALESCE(?, text),
                status = COALESCE(?, status)
            WHERE id = ?
            RETURNING id, text, status, archived
            "#,
        )
        .bind(data.text)
        .bind(data.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Self::not_found(id))?;

        debug!(task_id = id, "Updated task");
        Ok(task)
    }

    async fn archive(&self, id: i64) -> StoreResult<Task> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET archived = 1
            WHERE id = ?
            RETURNING id, text, status, archived
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Self::not_found(id))?;

        debug!(task_id = id, "Archived task");
        Ok(task)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        debug!(task_id = id, "Deleted task");
        Ok(())
    }
}
