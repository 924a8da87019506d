//! Router configuration module

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::app_state::AppState;
use crate::handlers::{health, movies};
use crate::middleware::request_logger_middleware;
use crate::openapi::openapi_json;

/// Movie resource routes, mounted under `/api/movies`.
pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(movies::list_movies)
                .post(movies::create_movie)
                .put(movies::update_movie),
        )
        .route("/{id}", get(movies::get_movie))
}

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let timeout = Duration::from_secs(app_state.config.request_timeout);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/docs/openapi.json", get(openapi_json))
        .nest("/api/movies", movie_routes())
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_logger_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    timeout,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
