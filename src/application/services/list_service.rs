//! List Service
//!
//! List lifecycle operations, including the image attachment pass-through.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{List, ListRepository};

/// List service trait
#[async_trait]
pub trait ListService: Send + Sync {
    /// Fetch every list
    async fn all_lists(&self) -> Result<Vec<List>, ListError>;

    /// Create a new list; its task count starts at zero
    async fn create_list(&self, name: &str) -> Result<(), ListError>;

    /// Rename a list
    async fn rename_list(&self, id: i64, name: &str) -> Result<(), ListError>;

    /// Delete a list and every task that belongs to it
    async fn delete_list(&self, id: i64) -> Result<(), ListError>;

    /// Attach image bytes to a list, stored verbatim
    async fn attach_image(&self, id: i64, bytes: Vec<u8>) -> Result<(), ListError>;

    /// Fetch the image bytes attached to a list, returned verbatim
    async fn image(&self, id: i64) -> Result<Vec<u8>, ListError>;
}

/// List service errors
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("No image stored for this list")]
    ImageNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// ListService implementation
pub struct ListServiceImpl<R>
where
    R: ListRepository,
{
    list_repo: Arc<R>,
}

impl<R> ListServiceImpl<R>
where
    R: ListRepository,
{
    pub fn new(list_repo: Arc<R>) -> Self {
        Self { list_repo }
    }
}

#[async_trait]
impl<R> ListService for ListServiceImpl<R>
where
    R: ListRepository + 'static,
{
    async fn all_lists(&self) -> Result<Vec<List>, ListError> {
        self.list_repo
            .find_all()
            .await
            .map_err(|e| ListError::Internal(e.to_string()))
    }

    async fn create_list(&self, name: &str) -> Result<(), ListError> {
        self.list_repo
            .create(name)
            .await
            .map_err(|e| ListError::Internal(e.to_string()))?;

        tracing::debug!(name, "list created");
        Ok(())
    }

    async fn rename_list(&self, id: i64, name: &str) -> Result<(), ListError> {
        self.list_repo
            .rename(id, name)
            .await
            .map_err(|e| ListError::Internal(e.to_string()))
    }

    async fn delete_list(&self, id: i64) -> Result<(), ListError> {
        self.list_repo
            .delete(id)
            .await
            .map_err(|e| ListError::Internal(e.to_string()))?;

        tracing::debug!(list_id = id, "list deleted with its tasks");
        Ok(())
    }

    async fn attach_image(&self, id: i64, bytes: Vec<u8>) -> Result<(), ListError> {
        let size = bytes.len();

        self.list_repo
            .store_image(id, bytes)
            .await
            .map_err(|e| ListError::Internal(e.to_string()))?;

        tracing::debug!(list_id = id, size, "image attached");
        Ok(())
    }

    async fn image(&self, id: i64) -> Result<Vec<u8>, ListError> {
        self.list_repo
            .load_image(id)
            .await
            .map_err(|e| ListError::Internal(e.to_string()))?
            .ok_or(ListError::ImageNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::list::MockListRepository;
    use crate::shared::error::AppError;

    #[tokio::test]
    async fn test_all_lists_passes_rows_through() {
        let mut repo = MockListRepository::new();
        repo.expect_find_all().times(1).returning(|| {
            Ok(vec![List {
                id: 1,
                name: "Groceries".to_string(),
                task_count: 0,
            }])
        });

        let service = ListServiceImpl::new(Arc::new(repo));
        let lists = service.all_lists().await.unwrap();

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Groceries");
        assert_eq!(lists[0].task_count, 0);
    }

    #[tokio::test]
    async fn test_create_list_delegates_to_repository() {
        let mut repo = MockListRepository::new();
        repo.expect_create().times(1).returning(|_| Ok(()));

        let service = ListServiceImpl::new(Arc::new(repo));
        assert!(service.create_list("Groceries").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_list_delegates_cascade_to_repository() {
        let mut repo = MockListRepository::new();
        repo.expect_delete()
            .times(1)
            .withf(|id| *id == 7)
            .returning(|_| Ok(()));

        let service = ListServiceImpl::new(Arc::new(repo));
        assert!(service.delete_list(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_image_round_trips_bytes() {
        let mut repo = MockListRepository::new();
        repo.expect_load_image()
            .returning(|_| Ok(Some(vec![0x89, 0x50, 0x4e, 0x47])));

        let service = ListServiceImpl::new(Arc::new(repo));
        let bytes = service.image(3).await.unwrap();

        assert_eq!(bytes, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[tokio::test]
    async fn test_missing_image_maps_to_image_not_found() {
        let mut repo = MockListRepository::new();
        repo.expect_load_image().returning(|_| Ok(None));

        let service = ListServiceImpl::new(Arc::new(repo));
        let err = service.image(3).await.unwrap_err();

        assert!(matches!(err, ListError::ImageNotFound));
    }

    #[tokio::test]
    async fn test_repository_error_wraps_as_internal() {
        let mut repo = MockListRepository::new();
        repo.expect_find_all()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolClosed)));

        let service = ListServiceImpl::new(Arc::new(repo));
        let err = service.all_lists().await.unwrap_err();

        assert!(matches!(err, ListError::Internal(_)));
    }
}
