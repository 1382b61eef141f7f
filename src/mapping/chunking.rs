// src/mapping/chunking.rs
//! Fitting long text into Notion's per-segment rich-text limit.
//!
//! Notion measures segment length in UTF-16 code units, so a character
//! outside the Basic Multilingual Plane counts twice. Cuts only ever fall on
//! `char` boundaries, which keeps surrogate pairs together.

use crate::constants::NOTION_RICH_TEXT_LIMIT;

/// Splits text into segments Notion will accept in one rich-text property.
///
/// Reassembling the segments in order yields the input. Empty text yields a
/// single empty segment, since Notion rejects an empty segment list for a
/// property that is being set.
pub fn split_rich_text(text: &str) -> Vec<&str> {
    split_at_units(text, NOTION_RICH_TEXT_LIMIT)
}

/// The longest prefix of `text` that fits in one rich-text segment.
pub fn truncate_rich_text(text: &str) -> &str {
    truncate_units(text, NOTION_RICH_TEXT_LIMIT)
}

/// Length of `text` as Notion counts it.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Positional split into pieces of at most `limit` UTF-16 units.
///
/// A limit below 2 is raised to 2 so every character fits in some piece.
pub fn split_at_units(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(2);
    if text.is_empty() {
        return vec![""];
    }

    let mut chunks = Vec::with_capacity(text.len() / limit + 1);
    let mut rest = text;
    while !rest.is_empty() {
        let (chunk, tail) = rest.split_at(prefix_end(rest, limit));
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

pub fn truncate_units(text: &str, limit: usize) -> &str {
    &text[..prefix_end(text, limit)]
}

/// Byte offset where the longest prefix within `limit` UTF-16 units ends.
fn prefix_end(text: &str, limit: usize) -> usize {
    let mut units = 0;
    for (offset, c) in text.char_indices() {
        units += c.len_utf16();
        if units > limit {
            return offset;
        }
    }
    text.len()
}
