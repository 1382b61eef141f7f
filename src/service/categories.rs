// src/service/categories.rs
use super::{Collection, RecordService};
use crate::api::{NotionPage, PropertyBag};
use crate::config::NotionSettings;
use crate::error::AppError;
use crate::mapping::{from_category_draft, to_category};
use crate::model::{Category, CategoryDraft};
use crate::types::{DatabaseId, ValidationError};

/// The categories database.
pub struct Categories;

impl Collection for Categories {
    type Record = Category;
    type Draft = CategoryDraft;

    const NOUN: &'static str = "category";

    fn database(settings: &NotionSettings) -> Result<DatabaseId, AppError> {
        settings.categories_database()
    }

    fn validate(draft: &CategoryDraft) -> Result<(), ValidationError> {
        draft.validate()
    }

    fn from_page(page: &NotionPage) -> Category {
        to_category(page)
    }

    fn to_properties(draft: &CategoryDraft) -> PropertyBag {
        from_category_draft(draft)
    }
}

pub type CategoryService = RecordService<Categories>;
