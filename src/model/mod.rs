// src/model/mod.rs
//! Domain records of the prompt directory.
//!
//! These are the shapes the REST API speaks (camelCase JSON); the Notion
//! property-bag shape lives in `crate::api::types` and the translation
//! between the two in `crate::mapping`.

mod category;
mod icon;
mod prompt;

pub use category::{Category, CategoryDraft};
pub use icon::IconName;
pub use prompt::{PromptDraft, PromptItem, PromptType};
