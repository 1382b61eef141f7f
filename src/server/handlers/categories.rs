// src/server/handlers/categories.rs
use super::{Deleted, JsonBody};
use crate::model::{Category, CategoryDraft};
use crate::server::error::{RouteContext, RouteError};
use crate::server::state::AppState;
use crate::types::PageId;
use axum::extract::{Path, State};
use axum::Json;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, RouteError> {
    let categories = state
        .categories
        .list()
        .await
        .map_err(|e| RouteError::without_details("Failed to fetch categories", e))?;
    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<CategoryDraft>,
) -> Result<Json<Category>, RouteError> {
    let created = state
        .categories
        .create(&draft)
        .await
        .context("Failed to create category")?;
    Ok(Json(created))
}

/// PUT /api/categories/{id}
///
/// Prompts filed under the old name keep it.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<CategoryDraft>,
) -> Result<Json<Category>, RouteError> {
    const ACTION: &str = "Failed to update category";
    let id = PageId::parse(&id).context(ACTION)?;
    let updated = state.categories.update(&id, &draft).await.context(ACTION)?;
    Ok(Json(updated))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, RouteError> {
    const ACTION: &str = "Failed to delete category";
    let id = PageId::parse(&id).context(ACTION)?;
    state.categories.delete(&id).await.context(ACTION)?;
    Ok(Json(Deleted::RESPONSE))
}
