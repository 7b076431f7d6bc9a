//! List entity and repository trait.
//!
//! Maps to the `lists` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a shared to-do list.
///
/// Maps to the `lists` table:
/// - listID: BIGINT PRIMARY KEY AUTO_INCREMENT
/// - listName: VARCHAR(255) NOT NULL
/// - taskCount: BIGINT NOT NULL DEFAULT 0 -- denormalized task count
/// - image: LONGBLOB NULL
///
/// The image column is never inlined into list queries; it is fetched
/// separately through the blob endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    /// Store-assigned identifier (primary key)
    #[serde(rename = "listID")]
    pub id: i64,

    /// Display name
    #[serde(rename = "listName")]
    pub name: String,

    /// Cached number of tasks belonging to this list.
    ///
    /// Recomputed inside the same transaction as every task insert and
    /// delete; must equal the number of `tasks` rows referencing this list.
    #[serde(rename = "taskCount")]
    pub task_count: i64,
}

/// Repository trait for List data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Fetch every list.
    async fn find_all(&self) -> Result<Vec<List>, AppError>;

    /// Insert a new list with a task count of zero.
    async fn create(&self, name: &str) -> Result<(), AppError>;

    /// Rename an existing list.
    async fn rename(&self, id: i64, name: &str) -> Result<(), AppError>;

    /// Delete a list together with every task that belongs to it.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Store image bytes on a list, replacing any previous image.
    async fn store_image(&self, id: i64, bytes: Vec<u8>) -> Result<(), AppError>;

    /// Load the image bytes attached to a list, if any.
    async fn load_image(&self, id: i64) -> Result<Option<Vec<u8>>, AppError>;
}
