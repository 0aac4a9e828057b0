#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use ecoeats_db::models::recipe::CreateRecipe;
use ecoeats_db::repositories::RecipeRepo;
use ecoeats_db::DataStore;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use ecoeats_api::config::ServerConfig;
use ecoeats_api::router::build_app_router;
use ecoeats_api::state::AppState;

/// Build a test `ServerConfig` rooted at `dir`.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        data_dir: dir.path().to_path_buf(),
        recipe_seed_path: None,
    }
}

/// Build the full application router over a fresh store in `dir`.
///
/// Goes through the same builder as `main.rs`, so tests exercise the
/// production middleware stack.
pub async fn build_test_app(dir: &TempDir) -> Router {
    let config = test_config(dir);
    let store = DataStore::open(&config.data_dir).await.unwrap();
    let state = AppState {
        store: Arc::new(store),
    };
    build_app_router(state, &config)
}

/// Insert a handful of recipes into the store under `dir`.
pub async fn seed_recipes(dir: &TempDir, recipes: Vec<CreateRecipe>) {
    let store = DataStore::open(dir.path()).await.unwrap();
    RecipeRepo::import(&store, recipes, Utc::now()).await.unwrap();
}

pub fn recipe(name: &str, cuisine: &str, uses: &[&str], tags: &[&str]) -> CreateRecipe {
    let to_vec = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    CreateRecipe {
        name: name.to_string(),
        cuisine_type: cuisine.to_string(),
        prep_time: 15,
        uses_ingredients: to_vec(uses),
        ingredients: to_vec(uses),
        instructions: vec!["Prepare".to_string(), "Serve".to_string()],
        dietary_tags: to_vec(tags),
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string())).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
