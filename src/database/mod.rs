use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::models::Movie;

pub mod memory;
pub mod repository;

pub use memory::InMemoryMovieStore;
pub use repository::MovieStore;

/// Failures reported by a movie store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("movie has no id")]
    MissingId,

    #[error("no movie with id {0}")]
    UnknownId(Uuid),

    #[error("movie store unavailable: {0}")]
    Unavailable(String),
}

/// Load seed movies from a JSON array file.
pub fn load_seed_file(path: &Path) -> Result<Vec<Movie>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let movies: Vec<Movie> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    info!(count = movies.len(), path = %path.display(), "Loaded seed movies");
    Ok(movies)
}

/// Build the in-memory store, seeded from `seed_file` when one is configured.
pub fn setup_store(seed_file: Option<&Path>) -> Result<InMemoryMovieStore> {
    let movies = match seed_file {
        Some(path) => load_seed_file(path)?,
        None => Vec::new(),
    };
    Ok(InMemoryMovieStore::with_movies(movies))
}
