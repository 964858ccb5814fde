//! Library exporters
//!
//! Each export is a stateless fetch-transform-render pass over the item set
//! of one collection (or the library's top-level items):
//! - BibTeX: typed entries with generated citation keys
//! - JSON: flat field projection
//! - Markdown: year-grouped reading list

pub mod bibtex;
pub mod json;
pub mod markdown;

use crate::adapters::ZoteroClient;
use crate::error::Result;
use crate::models::ItemRecord;

/// Page-size limit passed through to the API for export fetches.
pub const EXPORT_LIMIT: u32 = 500;

/// Fetch the item set an export operates on: a collection's items when a key
/// is given, else the library's top-level items.
pub async fn fetch_items(
    client: &ZoteroClient,
    collection_key: Option<&str>,
) -> Result<Vec<ItemRecord>> {
    match collection_key {
        Some(key) => client.collection_items(key, EXPORT_LIMIT).await,
        None => client.top_items(EXPORT_LIMIT).await,
    }
}

/// Bibliographic records only: attachments and notes never appear in exports.
pub fn bibliographic(items: &[ItemRecord]) -> impl Iterator<Item = &ItemRecord> {
    items.iter().filter(|item| !item.data.is_auxiliary())
}

#[cfg(test)]
pub(crate) fn test_item(item_type: &str, title: &str, date: &str) -> ItemRecord {
    use crate::models::ItemData;

    ItemRecord {
        key: format!("KEY{}", title.len()),
        version: 1,
        data: ItemData {
            item_type: item_type.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bibliographic_filters_attachments_and_notes() {
        let items = vec![
            test_item("journalArticle", "Paper", "2020"),
            test_item("attachment", "file.pdf", ""),
            test_item("note", "scratch", ""),
            test_item("book", "Book", "2019"),
        ];
        let kept: Vec<&str> = bibliographic(&items)
            .map(|i| i.data.item_type.as_str())
            .collect();
        assert_eq!(kept, vec!["journalArticle", "book"]);
    }
}
