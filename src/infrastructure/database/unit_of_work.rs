//! Unit of Work Pattern Implementation
//!
//! Provides transactional boundaries for database operations.
//! Ensures all statements within a mutating request succeed or fail together.

use futures::future::BoxFuture;
use sqlx::{MySql, MySqlPool, Transaction};

use crate::shared::error::AppError;

/// Execute a closure within a transaction.
///
/// Owns the whole lifecycle uniformly: borrows a pooled connection, begins a
/// transaction on it, commits when the closure succeeds and rolls back when
/// it fails. The connection returns to the pool on every exit path.
///
/// # Example
/// ```ignore
/// let count = with_transaction(&pool, move |tx| {
///     Box::pin(async move {
///         sqlx::query("INSERT INTO tasks (taskName, listID) VALUES (?, ?)")
///             .bind(name)
///             .bind(list_id)
///             .execute(&mut **tx)
///             .await?;
///         refresh_task_count(tx, list_id).await
///     })
/// })
/// .await?;
/// ```
pub async fn with_transaction<F, T>(pool: &MySqlPool, f: F) -> Result<T, AppError>
where
    F: for<'c> FnOnce(&'c mut Transaction<'static, MySql>) -> BoxFuture<'c, Result<T, AppError>>,
{
    let mut tx = pool.begin().await.map_err(AppError::Database)?;

    match f(&mut tx).await {
        Ok(value) => {
            tx.commit().await.map_err(AppError::Database)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(e)
        }
    }
}
