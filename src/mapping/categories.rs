// src/mapping/categories.rs
use super::{first_text, single_segment};
use crate::api::{NotionPage, PropertyBag, PropertyValue};
use crate::constants::{CATEGORY_COLOR, CATEGORY_ICON, CATEGORY_NAME};
use crate::model::{Category, CategoryDraft};

pub fn to_category(page: &NotionPage) -> Category {
    let props = &page.properties;
    Category {
        id: page.id.clone(),
        name: first_text(props, CATEGORY_NAME),
        icon: first_text(props, CATEGORY_ICON),
        color: first_text(props, CATEGORY_COLOR),
    }
}

pub fn from_category_draft(draft: &CategoryDraft) -> PropertyBag {
    PropertyBag::new()
        .with(CATEGORY_NAME, PropertyValue::Title(single_segment(&draft.name)))
        .with(CATEGORY_ICON, PropertyValue::RichText(single_segment(&draft.icon)))
        .with(CATEGORY_COLOR, PropertyValue::RichText(single_segment(&draft.color)))
}
