// src/model/prompt.rs
use super::IconName;
use crate::types::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of entry a prompt record holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    /// Text prompt for an AI model
    #[default]
    Prompt,
    /// Shell command or CLI invocation
    Command,
    /// Reusable code block
    Snippet,
}

impl PromptType {
    pub const ALL: [PromptType; 3] = [Self::Prompt, Self::Command, Self::Snippet];

    /// Looks up a type by its stored select-option name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Command => "command",
            Self::Snippet => "snippet",
        }
    }

    /// Icon a new record of this type starts with.
    pub fn default_icon(self) -> IconName {
        match self {
            Self::Prompt => IconName::Bot,
            Self::Command => IconName::Terminal,
            Self::Snippet => IconName::Code,
        }
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored prompt, command or snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptItem {
    /// Notion page ID
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub prompt_type: PromptType,
    /// Name of the category this prompt is filed under
    pub category: String,
    pub content: String,
    pub description: String,
    pub icon: String,
    pub is_favorite: bool,
    pub date_added: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl PromptItem {
    /// The writable fields of this record.
    pub fn to_draft(&self) -> PromptDraft {
        PromptDraft {
            title: self.title.clone(),
            prompt_type: self.prompt_type,
            category: self.category.clone(),
            content: self.content.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            is_favorite: self.is_favorite,
            tags: self.tags.clone(),
        }
    }
}

/// A prompt as submitted for creation or update.
///
/// `id` and `dateAdded` belong to Notion; request bodies may carry them but
/// they are never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub prompt_type: PromptType,
    pub category: String,
    pub content: String,
    pub description: String,
    pub icon: String,
    pub is_favorite: bool,
    pub tags: Vec<String>,
}

impl PromptDraft {
    pub fn new(title: impl Into<String>, prompt_type: PromptType) -> Self {
        Self {
            title: title.into(),
            prompt_type,
            icon: prompt_type.default_icon().as_str().to_string(),
            ..Self::default()
        }
    }

    /// Rejects drafts that cannot form a meaningful record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        Ok(())
    }
}
