// src/server/handlers/notion.rs
//! Direct access to Notion pages and databases, bypassing the record mappers.
//!
//! Property bags are forwarded verbatim, so callers speak Notion's own
//! request shape here. Failure bodies carry only `error`; the cause is
//! logged.

use super::JsonBody;
use crate::api::{NotionPage, PageContent, PropertyBag};
use crate::server::error::{RouteContext, RouteError};
use crate::server::state::AppState;
use crate::types::{DatabaseId, PageId};
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    #[serde(default)]
    pub database_id: Option<String>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePageRequest {
    #[serde(default)]
    pub page_id: Option<String>,
}

/// Blank strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// POST /api/notion/create
pub async fn create_page(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePageRequest>,
) -> Result<Json<NotionPage>, RouteError> {
    const ACTION: &str = "Failed to create page";
    let (Some(database_id), Some(properties)) = (present(request.database_id), request.properties)
    else {
        return Err(RouteError::bad_request("Database ID and properties are required"));
    };

    let database = DatabaseId::parse(&database_id).context_without_details(ACTION)?;
    let page = state
        .notion
        .create_page(&database, &PropertyBag::from(properties))
        .await
        .context_without_details(ACTION)?;
    Ok(Json(page))
}

/// POST /api/notion/update
pub async fn update_page(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdatePageRequest>,
) -> Result<Json<NotionPage>, RouteError> {
    const ACTION: &str = "Failed to update page";
    let (Some(page_id), Some(properties)) = (present(request.page_id), request.properties) else {
        return Err(RouteError::bad_request("Page ID and properties are required"));
    };

    let page = PageId::parse(&page_id).context_without_details(ACTION)?;
    let updated = state
        .notion
        .update_page(&page, &PropertyBag::from(properties))
        .await
        .context_without_details(ACTION)?;
    Ok(Json(updated))
}

/// POST /api/notion/delete
pub async fn delete_page(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DeletePageRequest>,
) -> Result<Json<NotionPage>, RouteError> {
    const ACTION: &str = "Failed to delete page";
    let Some(page_id) = present(request.page_id) else {
        return Err(RouteError::bad_request("Page ID is required"));
    };

    let page = PageId::parse(&page_id).context_without_details(ACTION)?;
    let archived = state.notion.archive_page(&page).await.context_without_details(ACTION)?;
    Ok(Json(archived))
}

/// GET /api/notion/database/{id}
pub async fn database_items(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<NotionPage>>, RouteError> {
    const ACTION: &str = "Failed to fetch database items";
    let database = DatabaseId::parse(&id).context_without_details(ACTION)?;
    let pages = state.notion.query_database(&database).await.context_without_details(ACTION)?;
    Ok(Json(pages))
}

/// GET /api/notion/page/{id}
pub async fn page_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PageContent>, RouteError> {
    const ACTION: &str = "Failed to fetch page";
    let page = PageId::parse(&id).context_without_details(ACTION)?;
    let content = state
        .notion
        .retrieve_page_content(&page)
        .await
        .context_without_details(ACTION)?;
    Ok(Json(content))
}
