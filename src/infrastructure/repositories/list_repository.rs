//! List Repository Implementation
//!
//! MySQL implementation of the ListRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::domain::{List, ListRepository};
use crate::infrastructure::database::with_transaction;
use crate::shared::error::AppError;

/// Database row representation matching the actual lists table schema.
///
/// The image column is deliberately absent; list queries never inline the
/// blob.
#[derive(Debug, sqlx::FromRow)]
struct ListRow {
    #[sqlx(rename = "listID")]
    list_id: i64,
    #[sqlx(rename = "listName")]
    list_name: String,
    #[sqlx(rename = "taskCount")]
    task_count: i64,
}

impl ListRow {
    /// Convert database row to domain List entity.
    fn into_list(self) -> List {
        List {
            id: self.list_id,
            name: self.list_name,
            task_count: self.task_count,
        }
    }
}

/// MySQL list repository implementation.
#[derive(Clone)]
pub struct MySqlListRepository {
    pool: MySqlPool,
}

impl MySqlListRepository {
    /// Create a new MySqlListRepository with the given connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for MySqlListRepository {
    /// Fetch every list. Single statement, no transaction wrapper.
    async fn find_all(&self) -> Result<Vec<List>, AppError> {
        let rows = sqlx::query_as::<_, ListRow>(
            r#"
            SELECT listID, listName, taskCount
            FROM lists
            ORDER BY listID ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_list()).collect())
    }

    /// Insert a new list with a task count of zero.
    async fn create(&self, name: &str) -> Result<(), AppError> {
        let name = name.to_owned();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query("INSERT INTO lists (listName, taskCount) VALUES (?, ?)")
                    .bind(name)
                    .bind(0_i64)
                    .execute(&mut **tx)
                    .await?;

                Ok(())
            })
        })
        .await
    }

    /// Rename an existing list.
    async fn rename(&self, id: i64, name: &str) -> Result<(), AppError> {
        let name = name.to_owned();

        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query("UPDATE lists SET listName = ? WHERE listID = ?")
                    .bind(name)
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                Ok(())
            })
        })
        .await
    }

    /// Delete a list together with every task that belongs to it.
    ///
    /// Dependent task rows go first; a failure between the two statements
    /// rolls back both, so no orphaned tasks and no half-deleted list.
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query("DELETE FROM tasks WHERE listID = ?")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                sqlx::query("DELETE FROM lists WHERE listID = ?")
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                Ok(())
            })
        })
        .await
    }

    /// Store image bytes on a list, replacing any previous image.
    async fn store_image(&self, id: i64, bytes: Vec<u8>) -> Result<(), AppError> {
        with_transaction(&self.pool, move |tx| {
            Box::pin(async move {
                sqlx::query("UPDATE lists SET image = ? WHERE listID = ?")
                    .bind(bytes)
                    .bind(id)
                    .execute(&mut **tx)
                    .await?;

                Ok(())
            })
        })
        .await
    }

    /// Load the image bytes attached to a list, if any.
    async fn load_image(&self, id: i64) -> Result<Option<Vec<u8>>, AppError> {
        let row: Option<(Option<Vec<u8>>,)> =
            sqlx::query_as("SELECT image FROM lists WHERE listID = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        // A missing row and a NULL image both mean "no image stored".
        Ok(row.and_then(|(image,)| image))
    }
}
