// src/lib.rs
//! prompt-directory library: a personal directory of AI prompts, shell
//! commands and code snippets, stored in a Notion workspace.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `NotionSettings`, `ServerConfig`
//! - **Domain model**: `PromptItem`, `Category` and their drafts
//! - **Notion adapter**: `NotionRepository`, `NotionHttpClient`
//! - **Mapping**: conversions between records and property bags
//! - **Services**: `PromptService`, `CategoryService`
//! - **Server**: `build_router`, `AppState`
//! - **Client data layer**: `DirectoryState`, `DirectoryClient`

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod mapping;
pub mod model;
pub mod server;
pub mod service;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionClientError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, NotionSettings, ServerConfig};

// --- Domain Model ---
pub use crate::model::{Category, CategoryDraft, IconName, PromptDraft, PromptItem, PromptType};

// --- Domain Types ---
pub use crate::types::{ApiKey, BlockId, DatabaseId, PageId, ValidatedUrl};

// --- Notion Adapter ---
pub use crate::api::{
    InMemoryRepository, NotionHttpClient, NotionPage, NotionRepository, PageContent, PropertyBag,
    PropertyValue,
};

// --- Services ---
pub use crate::service::{CategoryService, PromptService};

// --- Server ---
pub use crate::server::{build_router, AppState, RouteError};

// --- Client Data Layer ---
pub use crate::app::{Action, DirectoryClient, DirectoryState, TagList};
