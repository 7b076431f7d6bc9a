//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{List, Task};

/// Empty JSON object body returned by mutating endpoints
#[derive(Debug, Default, Serialize)]
pub struct EmptyResponse {}

/// List response row
#[derive(Debug, Serialize)]
pub struct ListResponse {
    #[serde(rename = "listID")]
    pub list_id: i64,

    #[serde(rename = "listName")]
    pub list_name: String,

    #[serde(rename = "taskCount")]
    pub task_count: i64,
}

impl From<List> for ListResponse {
    fn from(list: List) -> Self {
        Self {
            list_id: list.id,
            list_name: list.name,
            task_count: list.task_count,
        }
    }
}

/// Task response row
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    #[serde(rename = "taskID")]
    pub task_id: i64,

    #[serde(rename = "taskName")]
    pub task_name: String,

    #[serde(rename = "listID")]
    pub list_id: i64,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            task_id: task.id,
            task_name: task.name,
            list_id: task.list_id,
        }
    }
}
