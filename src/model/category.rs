// src/model/category.rs
use crate::types::ValidationError;
use serde::{Deserialize, Serialize};

/// A named bucket prompts are filed under.
///
/// Prompts refer to a category by `name`, not by `id`: categories are
/// freeform labels, and renaming one leaves existing prompts on the old name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Hex color, e.g. `#3B82F6`
    pub color: String,
}

/// A category as submitted for creation or update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        Ok(())
    }
}

impl Category {
    pub fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
        }
    }
}
