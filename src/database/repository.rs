//! Movie store abstraction.
//!
//! The controllers only see this trait; the concrete store is injected at
//! startup so tests can swap it for fixtures.

use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;
use crate::models::Movie;

/// Persistence collaborator for movie records
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All movies, in store order
    async fn list_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// Find a movie by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Movie>, StoreError>;

    /// Persist a new movie, assigning it a fresh ID
    async fn insert(&self, movie: Movie) -> Result<Movie, StoreError>;

    /// Replace the stored movie with the same ID
    async fn update(&self, movie: Movie) -> Result<(), StoreError>;
}
