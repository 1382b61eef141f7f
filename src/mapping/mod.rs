// src/mapping/mod.rs
//! Translation between domain records and Notion property bags.
//!
//! Reads are lenient: a missing or mistyped property falls back to the
//! field's default instead of failing the whole record. Writes always emit
//! every mapped property so that an update fully replaces the stored values.

pub mod categories;
pub mod chunking;
pub mod prompts;

pub use categories::{from_category_draft, to_category};
pub use chunking::{split_rich_text, truncate_rich_text};
pub use prompts::{from_prompt_draft, to_prompt_item};

use crate::api::{PropertyBag, PropertyValue, RichText, SelectOption};

/// The segments of a title or rich-text property.
fn text_segments(props: &PropertyBag, name: &str) -> Vec<RichText> {
    match props.get(name) {
        Some(PropertyValue::Title(segments)) | Some(PropertyValue::RichText(segments)) => segments,
        _ => Vec::new(),
    }
}

/// Text of the first segment only.
fn first_text(props: &PropertyBag, name: &str) -> String {
    text_segments(props, name)
        .first()
        .map(|segment| segment.as_str().to_string())
        .unwrap_or_default()
}

/// All segments joined in order, with no separator.
fn joined_text(props: &PropertyBag, name: &str) -> String {
    text_segments(props, name)
        .iter()
        .map(RichText::as_str)
        .collect()
}

fn select_name(props: &PropertyBag, name: &str) -> Option<String> {
    match props.get(name) {
        Some(PropertyValue::Select(Some(option))) => Some(option.name),
        _ => None,
    }
}

fn multi_select_names(props: &PropertyBag, name: &str) -> Vec<String> {
    match props.get(name) {
        Some(PropertyValue::MultiSelect(options)) => {
            options.into_iter().map(|option| option.name).collect()
        }
        _ => Vec::new(),
    }
}

fn checkbox(props: &PropertyBag, name: &str) -> bool {
    matches!(props.get(name), Some(PropertyValue::Checkbox(true)))
}

/// A single-segment rich-text value.
fn single_segment(text: &str) -> Vec<RichText> {
    vec![RichText::text(text)]
}

/// A select value; an empty name clears the selection.
fn select(name: &str) -> PropertyValue {
    if name.is_empty() {
        PropertyValue::Select(None)
    } else {
        PropertyValue::Select(Some(SelectOption::named(name)))
    }
}
