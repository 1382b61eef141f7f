// src/server/state.rs
use crate::api::NotionRepository;
use crate::config::NotionSettings;
use crate::service::{CategoryService, PromptService};
use std::sync::Arc;

/// Shared state handed to every handler through `State<AppState>`.
///
/// Nothing in here is mutable; cloning is a handful of `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    pub prompts: PromptService,
    pub categories: CategoryService,
    /// Raw workspace access for the passthrough routes.
    pub notion: Arc<dyn NotionRepository>,
}

impl AppState {
    pub fn new(notion: Arc<dyn NotionRepository>, settings: NotionSettings) -> Self {
        let settings = Arc::new(settings);
        Self {
            prompts: PromptService::new(Arc::clone(&notion), Arc::clone(&settings)),
            categories: CategoryService::new(Arc::clone(&notion), settings),
            notion,
        }
    }
}
