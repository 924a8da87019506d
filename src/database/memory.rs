use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{MovieStore, StoreError};
use crate::models::Movie;

/// Insertion-ordered movie store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Movies without an ID are given one.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let movies = movies
            .into_iter()
            .map(|mut movie| {
                movie.id.get_or_insert_with(Uuid::new_v4);
                movie
            })
            .collect();
        Self {
            movies: RwLock::new(movies),
        }
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Movie>, StoreError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| m.id == Some(id)).cloned())
    }

    async fn insert(&self, mut movie: Movie) -> Result<Movie, StoreError> {
        let id = Uuid::new_v4();
        movie.id = Some(id);

        self.movies.write().await.push(movie.clone());
        debug!(movie_id = %id, "Inserted movie");
        Ok(movie)
    }

    async fn update(&self, movie: Movie) -> Result<(), StoreError> {
        let id = movie.id.ok_or(StoreError::MissingId)?;

        let mut movies = self.movies.write().await;
        let slot = movies
            .iter_mut()
            .find(|m| m.id == Some(id))
            .ok_or(StoreError::UnknownId(id))?;
        *slot = movie;
        debug!(movie_id = %id, "Updated movie");
        Ok(())
    }
}
