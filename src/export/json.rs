//! Flat JSON projection of library items.

use crate::error::Result;
use crate::models::{Creator, ItemRecord};
use serde::Serialize;

/// The exported shape of one item.
#[derive(Debug, Serialize)]
pub struct ExportedItem {
    pub key: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub creators: Vec<Creator>,
    pub date: String,
    #[serde(rename = "DOI")]
    pub doi: String,
    pub url: String,
    pub r#abstract: String,
    pub tags: Vec<String>,
    pub collections: Vec<String>,
}

impl ExportedItem {
    fn from_record(record: &ItemRecord) -> Self {
        let data = &record.data;
        Self {
            key: record.key.clone(),
            item_type: data.item_type.clone(),
            title: data.title.clone(),
            creators: data.creators.clone(),
            date: data.date.clone(),
            doi: data.doi.clone(),
            url: data.url.clone(),
            r#abstract: data.abstract_note.clone(),
            tags: data.tags.iter().map(|t| t.tag.clone()).collect(),
            collections: data.collections.clone(),
        }
    }
}

/// Project the item set, dropping attachments and notes.
pub fn project_items(items: &[ItemRecord]) -> Vec<ExportedItem> {
    super::bibliographic(items)
        .map(ExportedItem::from_record)
        .collect()
}

/// Render the item set as a pretty-printed JSON array.
pub fn render_json(items: &[ItemRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&project_items(items))?)
}
