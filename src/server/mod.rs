// src/server/mod.rs
//! The REST surface: an axum router over the domain services.
//!
//! [`build_router`] is shared by the binary and the integration tests so
//! both run the same middleware stack.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{RouteContext, RouteError};
pub use state::AppState;

use crate::config::ServerConfig;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The full application router with CORS and request tracing.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /prompts                -> list_prompts
/// POST   /prompts                -> create_prompt
/// PUT    /prompts/{id}           -> update_prompt
/// DELETE /prompts/{id}           -> delete_prompt
/// GET    /categories             -> list_categories
/// POST   /categories             -> create_category
/// PUT    /categories/{id}        -> update_category
/// DELETE /categories/{id}        -> delete_category
/// POST   /notion/create          -> create_page
/// POST   /notion/update          -> update_page
/// POST   /notion/delete          -> delete_page
/// GET    /notion/database/{id}   -> database_items
/// GET    /notion/page/{id}       -> page_content
/// ```
pub fn api_routes() -> Router<AppState> {
    use handlers::{categories, notion, prompts};

    Router::new()
        .route(
            "/prompts",
            get(prompts::list_prompts).post(prompts::create_prompt),
        )
        .route(
            "/prompts/{id}",
            put(prompts::update_prompt).delete(prompts::delete_prompt),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/notion/create", post(notion::create_page))
        .route("/notion/update", post(notion::update_page))
        .route("/notion/delete", post(notion::delete_page))
        .route("/notion/database/{id}", get(notion::database_items))
        .route("/notion/page/{id}", get(notion::page_content))
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Without configured origins any origin may call the API.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if config.cors_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.trim_end_matches('/').parse() {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
