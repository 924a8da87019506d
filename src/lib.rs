pub mod app_state;
pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod router;
pub mod startup;

pub use app_state::AppState;
pub use config::Config;
pub use controllers::MoviesController;
pub use database::{InMemoryMovieStore, MovieStore, StoreError};
pub use error::ApiError;
pub use models::Movie;
