// src/api/memory.rs
//! A [`NotionRepository`] held entirely in process memory.
//!
//! It stands in for one Notion workspace: pages get fresh IDs and creation
//! times, archived pages drop out of queries, and unknown IDs fail with the
//! same `object_not_found` error Notion sends.

use super::{NotionPage, NotionRepository, PropertyBag};
use crate::error::{AppError, NotionClientError};
use crate::types::{BlockId, DatabaseId, PageId};
use chrono::Utc;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    workspace: RwLock<Workspace>,
}

#[derive(Debug, Default)]
struct Workspace {
    databases: HashSet<String>,
    /// Keyed by undashed page ID, in creation order.
    pages: IndexMap<String, StoredPage>,
    blocks: HashMap<String, Vec<Value>>,
}

#[derive(Debug)]
struct StoredPage {
    database: String,
    page: NotionPage,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a database pages can be created in.
    pub fn with_database(mut self, database: &DatabaseId) -> Self {
        self.workspace
            .get_mut()
            .databases
            .insert(database.as_str().to_string());
        self
    }

    /// Sets the child blocks returned for a page.
    pub fn with_blocks(mut self, page: &PageId, blocks: Vec<Value>) -> Self {
        self.workspace
            .get_mut()
            .blocks
            .insert(page.as_str().to_string(), blocks);
        self
    }

    /// A stored page, archived or not.
    pub async fn page(&self, page: &PageId) -> Option<NotionPage> {
        let workspace = self.workspace.read().await;
        workspace
            .pages
            .get(page.as_str())
            .map(|stored| stored.page.clone())
    }

    pub async fn len(&self) -> usize {
        self.workspace.read().await.pages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn not_found(kind: &str, id: &str) -> AppError {
    NotionClientError::NotionApi {
        status: 404,
        code: "object_not_found".to_string(),
        message: format!(
            "Could not find {} with ID: {}. Make sure the relevant pages and databases are shared with your integration.",
            kind, id
        ),
        request_id: None,
    }
    .into()
}

fn archived_edit(id: &str) -> AppError {
    NotionClientError::NotionApi {
        status: 400,
        code: "validation_error".to_string(),
        message: format!("Can't edit block that is archived. You must unarchive the block before editing: {}", id),
        request_id: None,
    }
    .into()
}

#[async_trait::async_trait]
impl NotionRepository for InMemoryRepository {
    async fn query_database(&self, database: &DatabaseId) -> Result<Vec<NotionPage>, AppError> {
        let workspace = self.workspace.read().await;
        if !workspace.databases.contains(database.as_str()) {
            return Err(not_found("database", &database.to_dashed()));
        }
        Ok(workspace
            .pages
            .values()
            .filter(|stored| stored.database == database.as_str() && !stored.page.archived)
            .map(|stored| stored.page.clone())
            .collect())
    }

    async fn retrieve_page(&self, page: &PageId) -> Result<NotionPage, AppError> {
        self.page(page)
            .await
            .ok_or_else(|| not_found("page", &page.to_dashed()))
    }

    async fn retrieve_children(&self, parent: &BlockId) -> Result<Vec<Value>, AppError> {
        let workspace = self.workspace.read().await;
        if !workspace.pages.contains_key(parent.as_str()) {
            return Err(not_found("block", &parent.to_dashed()));
        }
        Ok(workspace
            .blocks
            .get(parent.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn create_page(
        &self,
        database: &DatabaseId,
        properties: &PropertyBag,
    ) -> Result<NotionPage, AppError> {
        let mut workspace = self.workspace.write().await;
        if !workspace.databases.contains(database.as_str()) {
            return Err(not_found("database", &database.to_dashed()));
        }

        let id = PageId::new_v4();
        let mut extra = Map::new();
        extra.insert("object".to_string(), json!("page"));
        extra.insert(
            "parent".to_string(),
            json!({"type": "database_id", "database_id": database.to_dashed()}),
        );
        extra.insert(
            "url".to_string(),
            json!(format!("https://www.notion.so/{}", id.as_str())),
        );

        let page = NotionPage {
            id: id.to_dashed(),
            created_time: Utc::now(),
            archived: false,
            properties: properties.clone(),
            extra,
        };
        workspace.pages.insert(
            id.as_str().to_string(),
            StoredPage {
                database: database.as_str().to_string(),
                page: page.clone(),
            },
        );
        Ok(page)
    }

    async fn update_page(
        &self,
        page: &PageId,
        properties: &PropertyBag,
    ) -> Result<NotionPage, AppError> {
        let mut workspace = self.workspace.write().await;
        let stored = workspace
            .pages
            .get_mut(page.as_str())
            .ok_or_else(|| not_found("page", &page.to_dashed()))?;
        if stored.page.archived {
            return Err(archived_edit(&page.to_dashed()));
        }
        stored.page.properties.merge(properties);
        Ok(stored.page.clone())
    }

    async fn archive_page(&self, page: &PageId) -> Result<NotionPage, AppError> {
        let mut workspace = self.workspace.write().await;
        let stored = workspace
            .pages
            .get_mut(page.as_str())
            .ok_or_else(|| not_found("page", &page.to_dashed()))?;
        stored.page.archived = true;
        Ok(stored.page.clone())
    }
}
