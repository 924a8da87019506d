//! Shared fixtures for the integration tests.

use async_trait::async_trait;
use uuid::Uuid;

use movies_api::{Movie, MovieStore, StoreError};

/// Store that fails every call
pub struct FailingStore;

#[async_trait]
impl MovieStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        Err(StoreError::Unavailable("offline".into()))
    }

    async fn get_by_id(&self, _id: Uuid) -> Result<Option<Movie>, StoreError> {
        Err(StoreError::Unavailable("offline".into()))
    }

    async fn insert(&self, _movie: Movie) -> Result<Movie, StoreError> {
        Err(StoreError::Unavailable("offline".into()))
    }

    async fn update(&self, _movie: Movie) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("offline".into()))
    }
}
