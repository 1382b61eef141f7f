// src/service/mod.rs
//! Domain services: CRUD over one Notion database each.
//!
//! A service resolves its database from [`NotionSettings`] on every call,
//! maps drafts outbound, performs exactly one repository operation and maps
//! the resulting page back. Errors pass through unchanged.

mod categories;
mod prompts;

pub use categories::{Categories, CategoryService};
pub use prompts::{PromptService, Prompts};

use crate::api::{NotionPage, NotionRepository, PropertyBag};
use crate::config::NotionSettings;
use crate::error::AppError;
use crate::types::{DatabaseId, PageId, ValidationError};
use std::marker::PhantomData;
use std::sync::Arc;

/// A kind of record stored as the pages of one Notion database.
pub trait Collection: Send + Sync + 'static {
    type Record: Send;
    type Draft: Send + Sync;

    /// Singular noun used in log lines.
    const NOUN: &'static str;

    fn database(settings: &NotionSettings) -> Result<DatabaseId, AppError>;

    fn validate(draft: &Self::Draft) -> Result<(), ValidationError>;

    fn from_page(page: &NotionPage) -> Self::Record;

    fn to_properties(draft: &Self::Draft) -> PropertyBag;
}

/// CRUD over the pages of a [`Collection`].
pub struct RecordService<C: Collection> {
    repository: Arc<dyn NotionRepository>,
    settings: Arc<NotionSettings>,
    _collection: PhantomData<C>,
}

impl<C: Collection> Clone for RecordService<C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            settings: Arc::clone(&self.settings),
            _collection: PhantomData,
        }
    }
}

impl<C: Collection> RecordService<C> {
    pub fn new(repository: Arc<dyn NotionRepository>, settings: Arc<NotionSettings>) -> Self {
        Self {
            repository,
            settings,
            _collection: PhantomData,
        }
    }

    /// Every live record, in the order Notion returns them.
    pub async fn list(&self) -> Result<Vec<C::Record>, AppError> {
        let database = C::database(&self.settings)?;
        let pages = self.repository.query_database(&database).await?;
        log::debug!("Loaded {} {} pages", pages.len(), C::NOUN);
        Ok(pages.iter().map(C::from_page).collect())
    }

    /// Stores a new record; the returned record carries Notion's ID and timestamp.
    pub async fn create(&self, draft: &C::Draft) -> Result<C::Record, AppError> {
        C::validate(draft)?;
        let database = C::database(&self.settings)?;
        let page = self
            .repository
            .create_page(&database, &C::to_properties(draft))
            .await?;
        log::info!("Created {} {}", C::NOUN, page.id);
        Ok(C::from_page(&page))
    }

    /// Overwrites every mapped field of an existing record.
    pub async fn update(&self, id: &PageId, draft: &C::Draft) -> Result<C::Record, AppError> {
        C::validate(draft)?;
        let page = self
            .repository
            .update_page(id, &C::to_properties(draft))
            .await?;
        log::info!("Updated {} {}", C::NOUN, page.id);
        Ok(C::from_page(&page))
    }

    /// Archives the record's page.
    pub async fn delete(&self, id: &PageId) -> Result<(), AppError> {
        self.repository.archive_page(id).await?;
        log::info!("Archived {} {}", C::NOUN, id);
        Ok(())
    }
}
