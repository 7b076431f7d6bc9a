//! Task Service
//!
//! Task lifecycle operations within a list.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Task, TaskRepository};

/// Task service trait
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetch every task belonging to a list
    async fn tasks_for_list(&self, list_id: i64) -> Result<Vec<Task>, TaskError>;

    /// Add a task to a list; returns the list's refreshed task count
    async fn add_task(&self, name: &str, list_id: i64) -> Result<i64, TaskError>;

    /// Remove a task from a list; returns the list's refreshed task count
    async fn delete_task(&self, task_id: i64, list_id: i64) -> Result<i64, TaskError>;
}

/// Task service errors
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// TaskService implementation
pub struct TaskServiceImpl<T>
where
    T: TaskRepository,
{
    task_repo: Arc<T>,
}

impl<T> TaskServiceImpl<T>
where
    T: TaskRepository,
{
    pub fn new(task_repo: Arc<T>) -> Self {
        Self { task_repo }
    }
}

#[async_trait]
impl<T> TaskService for TaskServiceImpl<T>
where
    T: TaskRepository + 'static,
{
    async fn tasks_for_list(&self, list_id: i64) -> Result<Vec<Task>, TaskError> {
        self.task_repo
            .find_by_list_id(list_id)
            .await
            .map_err(|e| TaskError::Internal(e.to_string()))
    }

    async fn add_task(&self, name: &str, list_id: i64) -> Result<i64, TaskError> {
        let count = self
            .task_repo
            .create(name, list_id)
            .await
            .map_err(|e| TaskError::Internal(e.to_string()))?;

        tracing::debug!(list_id, count, "task added");
        Ok(count)
    }

    async fn delete_task(&self, task_id: i64, list_id: i64) -> Result<i64, TaskError> {
        let count = self
            .task_repo
            .delete(task_id, list_id)
            .await
            .map_err(|e| TaskError::Internal(e.to_string()))?;

        tracing::debug!(task_id, list_id, count, "task deleted");
        Ok(count)
    }
}
