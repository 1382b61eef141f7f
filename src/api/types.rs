// src/api/types.rs
//! Wire types for the parts of the Notion API this service touches.
//!
//! Pages keep their property bag as raw JSON so that unknown property types
//! and unknown top-level fields survive a pass through the service; typed
//! access goes through [`PropertyValue::from_json`].

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

// --- Pages ---

/// A page object as returned by the Notion API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionPage {
    pub id: String,
    pub created_time: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub properties: PropertyBag,
    /// Every other field Notion sent (`url`, `parent`, `icon`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A page together with its top-level child blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContent {
    pub page: NotionPage,
    pub blocks: Vec<Value>,
}

// --- Property bag ---

/// The per-page map of property name to property payload, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(IndexMap<String, Value>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a typed property in its request shape, e.g. `{"checkbox": true}`.
    pub fn with(mut self, name: &str, value: PropertyValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: PropertyValue) {
        self.0.insert(name.to_string(), value.to_json());
    }

    /// Reads a property leniently.
    ///
    /// Missing properties, unsupported property types and payloads that do
    /// not match their declared type all yield `None`; the latter is logged.
    pub fn get(&self, name: &str) -> Option<PropertyValue> {
        let raw = self.0.get(name)?;
        match PropertyValue::from_json(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring malformed property '{}': {}", name, e);
                None
            }
        }
    }

    /// Overwrites the properties `other` sets and keeps the rest, the way a
    /// page update does.
    pub fn merge(&mut self, other: &PropertyBag) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for PropertyBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

/// The property types the record mappers read and write.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Checkbox(bool),
    Date(Option<DateValue>),
}

impl PropertyValue {
    /// Parses either the response shape (`{"id", "type": "select", "select": ..}`)
    /// or the request shape (`{"select": ..}`).
    ///
    /// Returns `Ok(None)` for property types outside this vocabulary.
    pub fn from_json(value: &Value) -> Result<Option<Self>, serde_json::Error> {
        let Some(object) = value.as_object() else {
            return Ok(None);
        };

        let kind = match object.get("type").and_then(Value::as_str) {
            Some(kind) => kind,
            None if object.len() == 1 => match object.keys().next() {
                Some(kind) => kind.as_str(),
                None => return Ok(None),
            },
            None => return Ok(None),
        };

        let payload = object.get(kind).cloned().unwrap_or(Value::Null);
        let parsed = match kind {
            "title" => Self::Title(serde_json::from_value(payload)?),
            "rich_text" => Self::RichText(serde_json::from_value(payload)?),
            "select" => Self::Select(serde_json::from_value(payload)?),
            "multi_select" => Self::MultiSelect(serde_json::from_value(payload)?),
            "checkbox" => Self::Checkbox(serde_json::from_value(payload)?),
            "date" => Self::Date(serde_json::from_value(payload)?),
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }

    /// The request shape Notion expects when creating or updating a page.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Title(segments) => json!({ "title": segments }),
            Self::RichText(segments) => json!({ "rich_text": segments }),
            Self::Select(option) => json!({ "select": option }),
            Self::MultiSelect(options) => json!({ "multi_select": options }),
            Self::Checkbox(checked) => json!({ "checkbox": checked }),
            Self::Date(date) => json!({ "date": date }),
        }
    }
}

/// One rich-text segment.
///
/// Responses carry `plain_text`; requests only need `text.content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
}

impl RichText {
    /// A plain text segment in request shape.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            plain_text: None,
            text: Some(TextContent {
                content: content.into(),
            }),
        }
    }

    /// The segment's text, preferring Notion's rendered `plain_text`.
    pub fn as_str(&self) -> &str {
        self.plain_text
            .as_deref()
            .or_else(|| self.text.as_ref().map(|t| t.content.as_str()))
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// A select / multi-select option, identified by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The value of a date property; `start` is an ISO 8601 date or date-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

// --- Pagination ---

/// Generic paginated response from Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Result of a pagination operation.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
}
