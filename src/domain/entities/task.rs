//! Task entity and repository trait.
//!
//! Maps to the `tasks` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a single task within a list.
///
/// Maps to the `tasks` table:
/// - taskID: BIGINT PRIMARY KEY AUTO_INCREMENT
/// - taskName: VARCHAR(255) NOT NULL
/// - listID: BIGINT REFERENCES lists(listID)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier (primary key)
    #[serde(rename = "taskID")]
    pub id: i64,

    /// Display name
    #[serde(rename = "taskName")]
    pub name: String,

    /// Identifier of the owning list
    #[serde(rename = "listID")]
    pub list_id: i64,
}

/// Repository trait for Task data access operations.
///
/// The mutating operations refresh the owning list's cached task count
/// inside the same transaction and return the refreshed value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch every task belonging to a list.
    async fn find_by_list_id(&self, list_id: i64) -> Result<Vec<Task>, AppError>;

    /// Insert a task and refresh the owning list's task count.
    async fn create(&self, name: &str, list_id: i64) -> Result<i64, AppError>;

    /// Delete a task and refresh the owning list's task count.
    async fn delete(&self, task_id: i64, list_id: i64) -> Result<i64, AppError>;
}
