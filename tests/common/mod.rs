// tests/common/mod.rs
//! Shared harness: the production router over an in-memory workspace.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use prompt_directory::{
    build_router, AppState, DatabaseId, InMemoryRepository, NotionRepository, NotionSettings,
    ServerConfig,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const PROMPTS_DB: &str = "5f0c7a1e-3b2d-4c8e-9a6f-1d2e3f4a5b6c";
pub const CATEGORIES_DB: &str = "7a8b9c0d-1e2f-4a3b-8c4d-5e6f7a8b9c0d";

pub fn settings() -> NotionSettings {
    NotionSettings {
        token: Some("secret_test_key_123456789".to_string()),
        prompts_database: Some(PROMPTS_DB.to_string()),
        categories_database: Some(CATEGORIES_DB.to_string()),
        api_base_url: None,
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origins: Vec::new(),
        verbose: false,
    }
}

/// A workspace holding the prompts and categories databases.
pub fn workspace() -> Arc<InMemoryRepository> {
    Arc::new(
        InMemoryRepository::new()
            .with_database(&DatabaseId::parse(PROMPTS_DB).unwrap())
            .with_database(&DatabaseId::parse(CATEGORIES_DB).unwrap()),
    )
}

pub fn build_test_app_with(workspace: &Arc<InMemoryRepository>, settings: NotionSettings) -> Router {
    build_test_app_configured(workspace, settings, &test_config())
}

pub fn build_test_app_configured(
    workspace: &Arc<InMemoryRepository>,
    settings: NotionSettings,
    config: &ServerConfig,
) -> Router {
    let notion: Arc<dyn NotionRepository> = workspace.clone();
    build_router(AppState::new(notion, settings), config)
}

pub fn build_test_app(workspace: &Arc<InMemoryRepository>) -> Router {
    build_test_app_with(workspace, settings())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sends a request and returns its status with the decoded body.
pub async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    (status, body_json(response).await)
}
