//! Application state shared across all handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::controllers::MoviesController;
use crate::database::MovieStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Movie resource controller, holding the injected store
    pub movies: MoviesController,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn MovieStore>) -> Self {
        Self {
            config,
            movies: MoviesController::new(store),
        }
    }
}
