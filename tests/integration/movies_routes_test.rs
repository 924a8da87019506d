//! Route-level tests for the movie resource.
//!
//! Drives the full router (middleware included) against an in-memory store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use movies_api::{
    router::build_router, AppState, Config, InMemoryMovieStore, Movie, MovieStore,
};

struct Harness {
    store: Arc<InMemoryMovieStore>,
    movies: Vec<Movie>,
}

impl Harness {
    fn new() -> Self {
        let movies = vec![
            Movie::new("Titre 1").with_id(Uuid::new_v4()),
            Movie::new("Titre 2").with_id(Uuid::new_v4()),
        ];
        let store = Arc::new(InMemoryMovieStore::with_movies(movies.clone()));
        Self { store, movies }
    }

    fn app(&self) -> Router {
        build_router(AppState::new(Config::default(), self.store.clone()))
    }

    fn id(&self, index: usize) -> Uuid {
        self.movies[index].id.unwrap()
    }
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn list_returns_all_movies() {
    let h = Harness::new();
    let response = send(h.app(), Method::GET, "/api/movies", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let movies: Vec<Movie> = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(movies, h.movies);
}

#[tokio::test]
async fn get_by_id_returns_the_movie() {
    let h = Harness::new();
    let uri = format!("/api/movies/{}", h.id(0));
    let response = send(h.app(), Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let movie: Movie = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(movie, h.movies[0]);
}

#[tokio::test]
async fn get_with_malformed_id_is_bad_request() {
    let h = Harness::new();
    let response = send(h.app(), Method::GET, "/api/movies/1", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VAL_3003");
    assert_eq!(body["error"]["field"], "id");
    assert!(body["request_id"].is_string());
}

#[tokio::test]
async fn get_with_unknown_id_is_not_found_without_body() {
    let h = Harness::new();
    let uri = format!("/api/movies/{}", Uuid::new_v4());
    let response = send(h.app(), Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn post_inserts_new_movie() {
    let h = Harness::new();
    let response = send(
        h.app(),
        Method::POST,
        "/api/movies",
        Some(json!({ "title": "Titre 3" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let inserted: Movie = serde_json::from_value(body_json(response).await).unwrap();
    let id = inserted.id.expect("assigned id");
    assert_ne!(id, Uuid::nil());
    assert!(h.movies.iter().all(|m| m.id != Some(id)));
    assert_eq!(h.store.get_by_id(id).await.unwrap(), Some(inserted));
}

#[tokio::test]
async fn post_without_title_is_bad_request() {
    let h = Harness::new();
    let response = send(
        h.app(),
        Method::POST,
        "/api/movies",
        Some(json!({ "release_year": 1999 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VAL_3001");
    assert_eq!(body["error"]["field"], "title");
    assert_eq!(h.store.len().await, 2);
}

#[tokio::test]
async fn post_with_malformed_json_is_bad_request() {
    let h = Harness::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/movies")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = h.app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VAL_3003");
}

#[tokio::test]
async fn put_updates_existing_movie() {
    let h = Harness::new();
    let id = h.id(0);
    let response = send(
        h.app(),
        Method::PUT,
        "/api/movies",
        Some(json!({ "id": id, "title": "Nouveau titre" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());

    let stored = h.store.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Nouveau titre");
}

#[tokio::test]
async fn put_unknown_movie_returns_304() {
    let h = Harness::new();
    let response = send(
        h.app(),
        Method::PUT,
        "/api/movies",
        Some(json!({ "id": Uuid::new_v4(), "title": "x" })),
    )
    .await;
    assert_eq!(response.status().as_u16(), 304);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(h.store.list_all().await.unwrap(), h.movies);
}

#[tokio::test]
async fn put_with_invalid_model_is_bad_request() {
    let h = Harness::new();
    let response = send(
        h.app(),
        Method::PUT,
        "/api/movies",
        Some(json!({ "id": h.id(0), "title": "" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(h.store.list_all().await.unwrap(), h.movies);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let h = Harness::new();

    let response = send(h.app(), Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");

    let response = send(h.app(), Method::GET, "/api/docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/movies"].is_object());
    assert!(doc["paths"]["/api/movies/{id}"].is_object());
}
