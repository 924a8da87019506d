//! Movie resource controller.
//!
//! Maps list/get/create/update requests onto the injected [`MovieStore`] and
//! turns the results into typed outcomes. Validation happens before this
//! layer; the controller only inspects the [`ModelState`] it is handed.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::database::MovieStore;
use crate::error::{ApiError, Result};
use crate::handlers::extractors::{ModelState, ValidatedUuid};
use crate::models::Movie;

#[derive(Clone)]
pub struct MoviesController {
    store: Arc<dyn MovieStore>,
}

impl MoviesController {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Movie>> {
        let movies = self.store.list_all().await?;
        debug!(count = movies.len(), "Listed movies");
        Ok(movies)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Movie> {
        let id = ValidatedUuid::parse(raw_id)?;

        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Movie"))
    }

    pub async fn create(&self, movie: Movie, model_state: &ModelState) -> Result<Movie> {
        if !model_state.is_valid() {
            return Err(ApiError::InvalidModel(model_state.clone()));
        }

        let inserted = self.store.insert(movie).await?;
        info!(movie_id = ?inserted.id, title = %inserted.title, "Movie created");
        Ok(inserted)
    }

    /// Replace an existing movie.
    ///
    /// A missing or unknown ID yields [`ApiError::NotModified`] and leaves the
    /// store untouched.
    pub async fn update(&self, movie: Movie, model_state: &ModelState) -> Result<()> {
        if !model_state.is_valid() {
            return Err(ApiError::InvalidModel(model_state.clone()));
        }

        let Some(id) = movie.id else {
            warn!("Update rejected: movie has no id");
            return Err(ApiError::NotModified("Movie has no id".to_string()));
        };

        if self.store.get_by_id(id).await?.is_none() {
            warn!(movie_id = %id, "Update rejected: movie does not exist");
            return Err(ApiError::NotModified(format!("Movie {} does not exist", id)));
        }

        self.store.update(movie).await?;
        info!(movie_id = %id, "Movie updated");
        Ok(())
    }
}
