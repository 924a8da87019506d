//! Movies Handler
//!
//! HTTP routes for the movie resource. Each handler builds the model state
//! for its request body and delegates to the [`MoviesController`].
//!
//! [`MoviesController`]: crate::controllers::MoviesController

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::debug;

use crate::error::{handle_rejection, Result};
use crate::handlers::extractors::ModelState;
use crate::models::Movie;
use crate::AppState;

/// List all movies
/// GET /api/movies
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movies", body = [Movie]),
        (status = 500, description = "Movie store failure")
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>> {
    let movies = state.movies.list().await?;
    Ok(Json(movies))
}

/// Get a movie by ID
/// GET /api/movies/{id}
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie UUID")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 400, description = "Malformed movie ID"),
        (status = 404, description = "Movie not found")
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>> {
    let movie = state.movies.get(&id).await?;
    Ok(Json(movie))
}

/// Create a movie
/// POST /api/movies
#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "movies",
    request_body = Movie,
    responses(
        (status = 200, description = "Movie created, with its assigned ID", body = Movie),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Movie>, JsonRejection>,
) -> Result<Json<Movie>> {
    let Json(movie) = payload.map_err(handle_rejection)?;
    let model_state = ModelState::from_validation(&movie);
    debug!(valid = model_state.is_valid(), "Create movie request");

    let inserted = state.movies.create(movie, &model_state).await?;
    Ok(Json(inserted))
}

/// Update a movie
/// PUT /api/movies
#[utoipa::path(
    put,
    path = "/api/movies",
    tag = "movies",
    request_body = Movie,
    responses(
        (status = 200, description = "Movie updated"),
        (status = 304, description = "No movie with this ID"),
        (status = 400, description = "Validation error")
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Movie>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(movie) = payload.map_err(handle_rejection)?;
    let model_state = ModelState::from_validation(&movie);
    debug!(movie_id = ?movie.id, valid = model_state.is_valid(), "Update movie request");

    state.movies.update(movie, &model_state).await?;
    Ok(StatusCode::OK)
}
