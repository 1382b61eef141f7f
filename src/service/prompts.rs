// src/service/prompts.rs
use super::{Collection, RecordService};
use crate::api::{NotionPage, PropertyBag};
use crate::config::NotionSettings;
use crate::error::AppError;
use crate::mapping::{from_prompt_draft, to_prompt_item};
use crate::model::{PromptDraft, PromptItem};
use crate::types::{DatabaseId, ValidationError};

/// The prompts database.
pub struct Prompts;

impl Collection for Prompts {
    type Record = PromptItem;
    type Draft = PromptDraft;

    const NOUN: &'static str = "prompt";

    fn database(settings: &NotionSettings) -> Result<DatabaseId, AppError> {
        settings.prompts_database()
    }

    fn validate(draft: &PromptDraft) -> Result<(), ValidationError> {
        draft.validate()
    }

    fn from_page(page: &NotionPage) -> PromptItem {
        to_prompt_item(page)
    }

    fn to_properties(draft: &PromptDraft) -> PropertyBag {
        from_prompt_draft(draft)
    }
}

pub type PromptService = RecordService<Prompts>;
