// src/server/handlers/prompts.rs
use super::{Deleted, JsonBody};
use crate::model::{PromptDraft, PromptItem};
use crate::server::error::{RouteContext, RouteError};
use crate::server::state::AppState;
use crate::types::PageId;
use axum::extract::{Path, State};
use axum::Json;

/// GET /api/prompts
pub async fn list_prompts(State(state): State<AppState>) -> Result<Json<Vec<PromptItem>>, RouteError> {
    let prompts = state
        .prompts
        .list()
        .await
        .map_err(|e| RouteError::without_details("Failed to fetch prompts", e))?;
    Ok(Json(prompts))
}

/// POST /api/prompts
pub async fn create_prompt(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<PromptDraft>,
) -> Result<Json<PromptItem>, RouteError> {
    const ACTION: &str = "Failed to create prompt";
    let created = state.prompts.create(&draft).await.context(ACTION)?;
    Ok(Json(created))
}

/// PUT /api/prompts/{id}
///
/// The path ID wins over any `id` in the body.
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<PromptDraft>,
) -> Result<Json<PromptItem>, RouteError> {
    const ACTION: &str = "Failed to update prompt";
    let id = PageId::parse(&id).context(ACTION)?;
    let updated = state.prompts.update(&id, &draft).await.context(ACTION)?;
    Ok(Json(updated))
}

/// DELETE /api/prompts/{id}
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, RouteError> {
    const ACTION: &str = "Failed to delete prompt";
    let id = PageId::parse(&id).context(ACTION)?;
    state.prompts.delete(&id).await.context(ACTION)?;
    Ok(Json(Deleted::RESPONSE))
}
