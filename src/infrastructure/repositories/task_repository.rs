//! Task Repository Implementation
//!
//! MySQL implementation of the TaskRepository trait. Task mutations refresh
//! the owning list's cached count inside the same transaction.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, Transaction};

use crate::domain::{Task, TaskRepository};
use crate::infrastructure::database::with_transaction;
use crate::shared::error::AppError;

/// Database row representation matching the actual tasks table schema.
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    #[sqlx(rename = "taskID")]
    task_id: i64,
    #[sqlx(rename = "taskName")]
    task_name: String,
    #[sqlx(rename = "listID")]
    list_id: i64,
}

impl TaskRow {
    /// Convert database row to domain Task entity.
    fn into_task(self) -> Task {
        Task {
            id: self.task_id,
            name: self.task_name,
            list_id: self.list_id,
        }
    }
}

/// MySQL task repository implementation.
#[derive(Clone)]
pub struct MySqlTaskRepository {
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    /// Create a new MySqlTaskRepository with the given connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for MySqlTaskRepository {
    /// Fetch every task belonging to a list. Single statement, no
    /// transaction wrapper.
    async fn find_by_list_id(&self, list_id: i64) -> Result<Vec<Task>, AppError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT taskID, taskName, listID
            FROM tasks
            WHERE listID = ?
            ORDER BY taskID ASC
            "#,
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_task()).collect())
    }

    /// Insert a task and refresh the owning list's task count, inside one
    /// transaction. Returns the refreshed count.
    async fn create(&self, name: &str, list_id: i64) -> Result<i64, AppError> {
        let name = name.to_owned();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query("INSERT INTO tasks (taskName, listID) VALUES (?, ?)")
                    .bind(name)
                    .bind(list_id)
                    .execute(&mut **tx)
                    .await?;

                refresh_task_count(tx, list_id).await
            })
        })
        .await
    }

    /// Delete a task and refresh the owning list's task count, inside one
    /// transaction. Returns the refreshed count, which can be zero.
    async fn delete(&self, task_id: i64, list_id: i64) -> Result<i64, AppError> {
        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query("DELETE FROM tasks WHERE taskID = ?")
                    .bind(task_id)
                    .execute(&mut **tx)
                    .await?;

                refresh_task_count(tx, list_id).await
            })
        })
        .await
    }
}

/// Recount the tasks belonging to a list and write the result back to the
/// list row, inside the caller's transaction.
///
/// Full recount, not an increment; the cached value must match the table.
async fn refresh_task_count(
    tx: &mut Transaction<'static, MySql>,
    list_id: i64,
) -> Result<i64, AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE listID = ?")
        .bind(list_id)
        .fetch_one(&mut **tx)
        .await?;

    sqlx::query("UPDATE lists SET taskCount = ? WHERE listID = ?")
        .bind(count)
        .bind(list_id)
        .execute(&mut **tx)
        .await?;

    Ok(count)
}
