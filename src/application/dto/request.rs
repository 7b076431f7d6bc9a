//! Request DTOs
//!
//! Data structures for API request bodies. Field names are the wire
//! contract shared with the frontend.

use serde::Deserialize;

/// Add task request
#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    #[serde(rename = "taskName")]
    pub task_name: String,

    #[serde(rename = "listID")]
    pub list_id: i64,
}

/// Add list request
#[derive(Debug, Deserialize)]
pub struct AddListRequest {
    #[serde(rename = "listName")]
    pub list_name: String,
}

/// Delete list request
#[derive(Debug, Deserialize)]
pub struct DeleteListRequest {
    #[serde(rename = "listID")]
    pub list_id: i64,
}

/// Delete task request
#[derive(Debug, Deserialize)]
pub struct DeleteTaskRequest {
    #[serde(rename = "taskID")]
    pub task_id: i64,

    #[serde(rename = "listID")]
    pub list_id: i64,
}

/// Edit list name request
#[derive(Debug, Deserialize)]
pub struct EditListNameRequest {
    #[serde(rename = "listName")]
    pub list_name: String,

    #[serde(rename = "listID")]
    pub list_id: i64,
}
