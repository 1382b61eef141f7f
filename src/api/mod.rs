// src/api/mod.rs
//! Notion API interaction: the persistence layer of the prompt directory.
//!
//! Business logic depends on the [`NotionRepository`] trait, never on HTTP
//! details; [`NotionHttpClient`] is the production implementation.

pub mod client;
pub mod memory;
pub mod pagination;
pub mod parser;
pub mod types;

use crate::error::AppError;
use crate::types::{BlockId, DatabaseId, PageId};
use serde_json::Value;

pub use client::NotionHttpClient;
pub use memory::InMemoryRepository;
pub use types::{
    DateValue, NotionPage, PageContent, PropertyBag, PropertyValue, RichText, SelectOption,
};

/// The ability to read and write pages of a Notion workspace.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// All non-archived pages of a database, in the order Notion returns them.
    async fn query_database(&self, database: &DatabaseId) -> Result<Vec<NotionPage>, AppError>;

    async fn retrieve_page(&self, page: &PageId) -> Result<NotionPage, AppError>;

    /// Top-level child blocks, as raw block objects.
    async fn retrieve_children(&self, parent: &BlockId) -> Result<Vec<Value>, AppError>;

    async fn create_page(
        &self,
        database: &DatabaseId,
        properties: &PropertyBag,
    ) -> Result<NotionPage, AppError>;

    async fn update_page(
        &self,
        page: &PageId,
        properties: &PropertyBag,
    ) -> Result<NotionPage, AppError>;

    /// Soft delete: the page is flagged archived and drops out of queries,
    /// but its data and ID stay with Notion.
    async fn archive_page(&self, page: &PageId) -> Result<NotionPage, AppError>;

    /// Retrieves a page, then its blocks.
    async fn retrieve_page_content(&self, page: &PageId) -> Result<PageContent, AppError> {
        let notion_page = self.retrieve_page(page).await?;
        let blocks = self.retrieve_children(&page.cast()).await?;
        Ok(PageContent {
            page: notion_page,
            blocks,
        })
    }
}
