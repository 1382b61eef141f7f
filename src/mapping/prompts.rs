// src/mapping/prompts.rs
use super::chunking::{split_rich_text, truncate_rich_text};
use super::{checkbox, first_text, joined_text, multi_select_names, select, select_name, single_segment};
use crate::api::{NotionPage, PropertyBag, PropertyValue, RichText, SelectOption};
use crate::constants::{
    PROMPT_CATEGORY, PROMPT_CONTENT, PROMPT_DATE_ADDED, PROMPT_DESCRIPTION, PROMPT_ICON,
    PROMPT_IS_FAVORITE, PROMPT_TAGS, PROMPT_TITLE, PROMPT_TYPE,
};
use crate::model::{PromptDraft, PromptItem, PromptType};
use chrono::{DateTime, NaiveDate, Utc};

/// Reads a prompt record from a page of the prompts database.
pub fn to_prompt_item(page: &NotionPage) -> PromptItem {
    let props = &page.properties;
    PromptItem {
        id: page.id.clone(),
        title: first_text(props, PROMPT_TITLE),
        prompt_type: prompt_type(page),
        category: select_name(props, PROMPT_CATEGORY).unwrap_or_default(),
        content: joined_text(props, PROMPT_CONTENT),
        description: first_text(props, PROMPT_DESCRIPTION),
        icon: first_text(props, PROMPT_ICON),
        is_favorite: checkbox(props, PROMPT_IS_FAVORITE),
        date_added: date_added(page),
        tags: multi_select_names(props, PROMPT_TAGS),
    }
}

/// Builds the property bag that creates or overwrites a prompt page.
///
/// Content is spread over as many segments as it needs; the description is
/// cut to a single segment.
pub fn from_prompt_draft(draft: &PromptDraft) -> PropertyBag {
    let content = split_rich_text(&draft.content)
        .into_iter()
        .map(RichText::text)
        .collect();
    let tags = draft.tags.iter().map(SelectOption::named).collect();

    PropertyBag::new()
        .with(PROMPT_TITLE, PropertyValue::Title(single_segment(&draft.title)))
        .with(PROMPT_TYPE, select(draft.prompt_type.as_str()))
        .with(PROMPT_CATEGORY, select(&draft.category))
        .with(PROMPT_CONTENT, PropertyValue::RichText(content))
        .with(
            PROMPT_DESCRIPTION,
            PropertyValue::RichText(single_segment(truncate_rich_text(&draft.description))),
        )
        .with(PROMPT_ICON, PropertyValue::RichText(single_segment(&draft.icon)))
        .with(PROMPT_IS_FAVORITE, PropertyValue::Checkbox(draft.is_favorite))
        .with(PROMPT_TAGS, PropertyValue::MultiSelect(tags))
}

fn prompt_type(page: &NotionPage) -> PromptType {
    match select_name(&page.properties, PROMPT_TYPE) {
        None => PromptType::default(),
        Some(name) => PromptType::from_name(&name).unwrap_or_else(|| {
            log::warn!(
                "Page {} has unknown prompt type '{}', reading it as '{}'",
                page.id,
                name,
                PromptType::default()
            );
            PromptType::default()
        }),
    }
}

fn date_added(page: &NotionPage) -> DateTime<Utc> {
    let start = match page.properties.get(PROMPT_DATE_ADDED) {
        Some(PropertyValue::Date(Some(date))) => date.start,
        _ => return page.created_time,
    };

    parse_notion_date(&start).unwrap_or_else(|| {
        log::warn!(
            "Page {} has unreadable {} '{}', using its creation time",
            page.id,
            PROMPT_DATE_ADDED,
            start
        );
        page.created_time
    })
}

/// Notion dates are either full RFC 3339 timestamps or bare `YYYY-MM-DD`.
fn parse_notion_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NOTION_RICH_TEXT_LIMIT;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn page(properties: Value) -> NotionPage {
        serde_json::from_value(json!({
            "object": "page",
            "id": "11111111-2222-3333-4444-555555555555",
            "created_time": "2024-01-15T08:30:00.000Z",
            "properties": properties
        }))
        .unwrap()
    }

    fn stored(draft: &PromptDraft) -> NotionPage {
        page(serde_json::to_value(from_prompt_draft(draft)).unwrap())
    }

    fn sample_draft() -> PromptDraft {
        PromptDraft {
            title: "Review this diff".to_string(),
            prompt_type: PromptType::Snippet,
            category: "Code Review".to_string(),
            content: "Look for off-by-one errors.".to_string(),
            description: "Reviewer prompt".to_string(),
            icon: "Code".to_string(),
            is_favorite: true,
            tags: vec!["review".to_string(), "git".to_string()],
        }
    }

    #[test]
    fn test_empty_page_reads_as_defaults() {
        let item = to_prompt_item(&page(json!({})));
        assert_eq!(item.id, "11111111-2222-3333-4444-555555555555");
        assert_eq!(item.title, "");
        assert_eq!(item.prompt_type, PromptType::Prompt);
        assert_eq!(item.category, "");
        assert_eq!(item.description, "");
        assert_eq!(item.icon, "");
        assert!(!item.is_favorite);
        assert!(item.tags.is_empty());
        assert_eq!(item.date_added.to_rfc3339(), "2024-01-15T08:30:00+00:00");
    }

    #[test]
    fn test_reads_response_shape() {
        let item = to_prompt_item(&page(json!({
            "Title": {"id": "title", "type": "title",
                      "title": [{"type": "text", "plain_text": "Deploy"}, {"type": "text", "plain_text": " ignored"}]},
            "Type": {"id": "t", "type": "select", "select": {"name": "command"}},
            "Category": {"id": "c", "type": "select", "select": {"name": "Command Lines"}},
            "Content": {"id": "x", "type": "rich_text",
                        "rich_text": [{"plain_text": "kubectl "}, {"plain_text": "apply -f ."}]},
            "IsFavorite": {"id": "f", "type": "checkbox", "checkbox": true},
            "Tags": {"id": "g", "type": "multi_select", "multi_select": [{"name": "k8s"}, {"name": "ops"}]},
            "DateAdded": {"id": "d", "type": "date", "date": {"start": "2024-03-01"}}
        })));

        assert_eq!(item.title, "Deploy");
        assert_eq!(item.prompt_type, PromptType::Command);
        assert_eq!(item.category, "Command Lines");
        assert_eq!(item.content, "kubectl apply -f .");
        assert!(item.is_favorite);
        assert_eq!(item.tags, vec!["k8s", "ops"]);
        assert_eq!(item.date_added.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_date_added_accepts_timestamps_and_falls_back() {
        let with_time = page(json!({"DateAdded": {"date": {"start": "2024-03-01T10:00:00.000+02:00"}}}));
        assert_eq!(
            to_prompt_item(&with_time).date_added.to_rfc3339(),
            "2024-03-01T08:00:00+00:00"
        );

        let garbage = page(json!({"DateAdded": {"date": {"start": "last tuesday"}}}));
        assert_eq!(to_prompt_item(&garbage).date_added, garbage.created_time);

        let cleared = page(json!({"DateAdded": {"date": null}}));
        assert_eq!(to_prompt_item(&cleared).date_added, cleared.created_time);
    }

    #[test]
    fn test_unknown_type_reads_as_prompt() {
        let item = to_prompt_item(&page(json!({"Type": {"select": {"name": "macro"}}})));
        assert_eq!(item.prompt_type, PromptType::Prompt);
    }

    #[test]
    fn test_writes_every_property() {
        let bag = serde_json::to_value(from_prompt_draft(&sample_draft())).unwrap();
        assert_eq!(
            bag,
            json!({
                "Title": {"title": [{"text": {"content": "Review this diff"}}]},
                "Type": {"select": {"name": "snippet"}},
                "Category": {"select": {"name": "Code Review"}},
                "Content": {"rich_text": [{"text": {"content": "Look for off-by-one errors."}}]},
                "Description": {"rich_text": [{"text": {"content": "Reviewer prompt"}}]},
                "Icon": {"rich_text": [{"text": {"content": "Code"}}]},
                "IsFavorite": {"checkbox": true},
                "Tags": {"multi_select": [{"name": "review"}, {"name": "git"}]}
            })
        );
    }

    #[test]
    fn test_empty_content_is_written_as_one_empty_segment() {
        let draft = PromptDraft::new("t", PromptType::Prompt);
        let bag = serde_json::to_value(from_prompt_draft(&draft)).unwrap();
        assert_eq!(bag["Content"], json!({"rich_text": [{"text": {"content": ""}}]}));
        assert_eq!(bag["Category"], json!({"select": null}));
    }

    #[test]
    fn test_long_content_is_chunked() {
        let mut draft = sample_draft();
        draft.content = "z".repeat(NOTION_RICH_TEXT_LIMIT * 2 + 7);
        let bag = serde_json::to_value(from_prompt_draft(&draft)).unwrap();
        let segments = bag["Content"]["rich_text"].as_array().unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2]["text"]["content"], "zzzzzzz");
    }

    #[test]
    fn test_long_description_is_truncated() {
        let mut draft = sample_draft();
        draft.description = format!("{}overflow", "d".repeat(NOTION_RICH_TEXT_LIMIT));
        let item = to_prompt_item(&stored(&draft));
        assert_eq!(item.description, "d".repeat(NOTION_RICH_TEXT_LIMIT));
    }

    #[test]
    fn test_round_trip_preserves_writable_fields() {
        let mut drafts = vec![sample_draft(), PromptDraft::new("Bare", PromptType::Command)];
        let mut long = sample_draft();
        long.content = "ünïcödé ".repeat(900);
        drafts.push(long);

        for draft in drafts {
            let item = to_prompt_item(&stored(&draft));
            assert_eq!(item.to_draft(), draft);
        }
    }
}
