use utoipa::OpenApi;

use crate::handlers::{health, movies};
use crate::models::Movie;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(title = "Movies API", version = "0.1.0"),
    paths(
        health::health_check,
        movies::list_movies,
        movies::get_movie,
        movies::create_movie,
        movies::update_movie,
    ),
    components(schemas(Movie, health::HealthStatus)),
    tags(
        (name = "movies", description = "Movie catalogue"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Serve the generated document
pub async fn openapi_json() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
