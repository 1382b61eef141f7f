// src/app/state.rs
//! The directory's view state as an immutable snapshot plus a reducer.
//!
//! A front end keeps one [`DirectoryState`], feeds every user action and
//! server reply through [`DirectoryState::apply`], and renders from the
//! derived queries. Collections are `im::Vector`s, so every snapshot shares
//! structure with the one it was derived from.
//!
//! # Laws
//!
//! - **L1 (Purity)**: `apply` never mutates its receiver.
//!   ```text
//!   let next = state.apply(action);
//!   // `state` is unchanged
//!   ```
//! - **L2 (Selection validity)**: after any action, `selected` is either
//!   `None` or the id of a prompt in `prompts`.
//! - **L3 (Upsert)**: saving a record whose id is already present replaces it
//!   in place; otherwise it is appended.
//! - **L4 (Stable order)**: `visible_prompts` sorts stably, so records that
//!   tie on the sort key keep the order the server returned them in.

use crate::model::{Category, PromptItem, PromptType};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The main screen currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Gallery,
    Categories,
    Settings,
    Help,
}

/// Which prompts the gallery shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Favorites,
    /// Prompts filed under this category name
    Named(String),
}

impl CategoryFilter {
    /// Parses the sidebar key: `all`, `favorites`, or a category name.
    pub fn parse(key: &str) -> Self {
        match key {
            "all" => Self::All,
            "favorites" => Self::Favorites,
            name => Self::Named(name.to_string()),
        }
    }

    pub fn matches(&self, prompt: &PromptItem) -> bool {
        match self {
            Self::All => true,
            Self::Favorites => prompt.is_favorite,
            Self::Named(name) => prompt.category == *name,
        }
    }
}

/// Gallery ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest `dateAdded` first
    #[default]
    Date,
    /// Title, ignoring case
    Name,
    /// Type name, alphabetically
    Type,
}

impl SortBy {
    fn compare(self, a: &PromptItem, b: &PromptItem) -> Ordering {
        match self {
            Self::Date => b.date_added.cmp(&a.date_added),
            Self::Name => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
            Self::Type => a.prompt_type.as_str().cmp(b.prompt_type.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// User display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    pub theme: Theme,
    pub default_view: ViewMode,
    pub items_per_page: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            default_view: ViewMode::Grid,
            items_per_page: 12,
        }
    }
}

/// Everything that can happen to the directory view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted,
    Loaded {
        prompts: Vec<PromptItem>,
        categories: Vec<Category>,
    },
    LoadFailed(String),
    ShowView(View),
    SelectCategory(CategoryFilter),
    Search(String),
    /// Restrict the gallery to one type; `None` shows every type
    FilterType(Option<PromptType>),
    SortBy(SortBy),
    SetViewMode(ViewMode),
    SelectPrompt(String),
    ClearSelection,
    /// A created or updated prompt as returned by the server
    PromptSaved(PromptItem),
    PromptRemoved(String),
    CategorySaved(Category),
    CategoryRemoved(String),
    UpdateSettings(ViewSettings),
    /// A write failed; the message is shown until dismissed
    Failed(String),
    DismissError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    pub prompts: Vector<PromptItem>,
    pub categories: Vector<Category>,
    pub view: View,
    pub filter: CategoryFilter,
    pub search: String,
    pub type_filter: Option<PromptType>,
    pub sort: SortBy,
    pub view_mode: ViewMode,
    /// Id of the prompt open in the detail view
    pub selected: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub settings: ViewSettings,
}

impl Default for DirectoryState {
    /// The state before the first load: empty and loading.
    fn default() -> Self {
        let settings = ViewSettings::default();
        Self {
            prompts: Vector::new(),
            categories: Vector::new(),
            view: View::default(),
            filter: CategoryFilter::default(),
            search: String::new(),
            type_filter: None,
            sort: SortBy::default(),
            view_mode: settings.default_view,
            selected: None,
            loading: true,
            error: None,
            settings,
        }
    }
}

impl DirectoryState {
    /// The state that results from `action`.
    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::LoadStarted => {
                next.loading = true;
                next.error = None;
            }
            Action::Loaded {
                prompts,
                categories,
            } => {
                next.prompts = prompts.into_iter().collect();
                next.categories = categories.into_iter().collect();
                next.loading = false;
                next.error = None;
            }
            Action::LoadFailed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            Action::ShowView(view) => next.view = view,
            Action::SelectCategory(filter) => {
                next.filter = filter;
                next.view = View::Gallery;
            }
            Action::Search(query) => next.search = query,
            Action::FilterType(prompt_type) => next.type_filter = prompt_type,
            Action::SortBy(sort) => next.sort = sort,
            Action::SetViewMode(mode) => next.view_mode = mode,
            Action::SelectPrompt(id) => {
                if next.prompts.iter().any(|p| p.id == id) {
                    next.selected = Some(id);
                }
            }
            Action::ClearSelection => next.selected = None,
            Action::PromptSaved(prompt) => upsert(&mut next.prompts, prompt, |p| &p.id),
            Action::PromptRemoved(id) => {
                next.prompts.retain(|p| p.id != id);
            }
            Action::CategorySaved(category) => {
                upsert(&mut next.categories, category, |c| &c.id)
            }
            Action::CategoryRemoved(id) => {
                let removed = next.categories.iter().find(|c| c.id == id).map(|c| c.name.clone());
                next.categories.retain(|c| c.id != id);
                if let Some(name) = removed {
                    if next.filter == CategoryFilter::Named(name) {
                        next.filter = CategoryFilter::All;
                    }
                }
            }
            Action::UpdateSettings(settings) => next.settings = settings,
            Action::Failed(message) => next.error = Some(message),
            Action::DismissError => next.error = None,
        }

        if let Some(selected) = &next.selected {
            if !next.prompts.iter().any(|p| &p.id == selected) {
                next.selected = None;
            }
        }
        next
    }

    /// Prompts passing the category filter, the type filter and the search
    /// query, in gallery order.
    ///
    /// The query matches case-insensitively against title, content and tags;
    /// an empty query matches everything.
    pub fn visible_prompts(&self) -> Vec<&PromptItem> {
        let query = self.search.to_lowercase();
        let mut visible: Vec<&PromptItem> = self
            .prompts
            .iter()
            .filter(|p| self.filter.matches(p))
            .filter(|p| self.type_filter.map_or(true, |t| p.prompt_type == t))
            .filter(|p| matches_query(p, &query))
            .collect();
        visible.sort_by(|a, b| self.sort.compare(a, b));
        visible
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    pub fn favorite_count(&self) -> usize {
        self.prompts.iter().filter(|p| p.is_favorite).count()
    }

    pub fn selected_prompt(&self) -> Option<&PromptItem> {
        let id = self.selected.as_ref()?;
        self.prompts.iter().find(|p| &p.id == id)
    }

    /// The prompt with its favorite flag flipped, ready to send as an update.
    pub fn toggled_favorite(&self, id: &str) -> Option<PromptItem> {
        let mut prompt = self.prompts.iter().find(|p| p.id == id)?.clone();
        prompt.is_favorite = !prompt.is_favorite;
        Some(prompt)
    }
}

fn matches_query(prompt: &PromptItem, query: &str) -> bool {
    prompt.title.to_lowercase().contains(query)
        || prompt.content.to_lowercase().contains(query)
        || prompt.tags.iter().any(|t| t.to_lowercase().contains(query))
}

fn upsert<T: Clone>(items: &mut Vector<T>, item: T, id: impl Fn(&T) -> &String) {
    let position = items.iter().position(|existing| id(existing) == id(&item));
    match position {
        Some(index) => {
            items.set(index, item);
        }
        None => items.push_back(item),
    }
}
