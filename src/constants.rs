// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base address of the public Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// API version pinned through the `Notion-Version` header.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Longest text Notion accepts in a single rich-text segment.
///
/// Longer prompt content is split across several segments of one property;
/// descriptions are cut at this length instead.
pub const NOTION_RICH_TEXT_LIMIT: usize = 2000;

// ---------------------------------------------------------------------------
// Property names of the prompts database
// ---------------------------------------------------------------------------

pub const PROMPT_TITLE: &str = "Title";
pub const PROMPT_TYPE: &str = "Type";
pub const PROMPT_CATEGORY: &str = "Category";
pub const PROMPT_CONTENT: &str = "Content";
pub const PROMPT_DESCRIPTION: &str = "Description";
pub const PROMPT_ICON: &str = "Icon";
pub const PROMPT_IS_FAVORITE: &str = "IsFavorite";
pub const PROMPT_TAGS: &str = "Tags";
/// Optional date column; pages without it fall back to their creation time.
pub const PROMPT_DATE_ADDED: &str = "DateAdded";

// ---------------------------------------------------------------------------
// Property names of the categories database
// ---------------------------------------------------------------------------

pub const CATEGORY_NAME: &str = "Name";
pub const CATEGORY_ICON: &str = "Icon";
pub const CATEGORY_COLOR: &str = "Color";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

pub const ENV_NOTION_TOKEN: &str = "NOTION_TOKEN";
pub const ENV_PROMPTS_DATABASE_ID: &str = "NOTION_PROMPTS_DATABASE_ID";
pub const ENV_CATEGORIES_DATABASE_ID: &str = "NOTION_CATEGORIES_DATABASE_ID";
pub const ENV_NOTION_API_BASE_URL: &str = "NOTION_API_BASE_URL";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
