//! Year-grouped Markdown reading list.

use crate::models::ItemRecord;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Render the item set as a Markdown reading list grouped by year,
/// newest first.
pub fn render_markdown_list(items: &[ItemRecord]) -> String {
    render_markdown_list_at(items, Local::now())
}

pub fn render_markdown_list_at(items: &[ItemRecord], generated: DateTime<Local>) -> String {
    let mut lines = vec![
        "# Zotero Library Export\n".to_string(),
        format!("Generated: {}\n", generated.format("%Y-%m-%d %H:%M")),
    ];

    let mut by_year: BTreeMap<String, Vec<&ItemRecord>> = BTreeMap::new();
    for item in super::bibliographic(items) {
        by_year.entry(item.data.year()).or_default().push(item);
    }

    // Descending year order; "Unknown" sorts above the numeric years.
    for (year, year_items) in by_year.iter().rev() {
        lines.push(format!("\n## {}\n", year));
        for item in year_items {
            lines.push(render_item(item));
        }
    }

    lines.join("\n")
}

fn render_item(item: &ItemRecord) -> String {
    let data = &item.data;

    let mut authors = data
        .creators
        .iter()
        .take(3)
        .map(|c| c.display_surname().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if data.creators.len() > 3 {
        authors.push_str(" et al.");
    }

    let title = if data.title.is_empty() {
        "Untitled"
    } else {
        &data.title
    };

    if data.doi.is_empty() {
        format!("- **{}** - {}", title, authors)
    } else {
        format!(
            "- **{}** - {} [DOI](https://doi.org/{})",
            title, authors, data.doi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_item;
    use crate::models::Creator;

    fn author(last: &str) -> Creator {
        Creator {
            creator_type: "author".to_string(),
            first_name: "A".to_string(),
            last_name: last.to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn test_years_descend() {
        let items = vec![
            test_item("book", "Older", "2019"),
            test_item("book", "Newer2", "2020"),
        ];
        let md = render_markdown_list(&items);
        let newer = md.find("## 2020").unwrap();
        let older = md.find("## 2019").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_attachments_and_notes_excluded() {
        let items = vec![
            test_item("attachment", "file.pdf", "2020"),
            test_item("note", "scratch", "2020"),
            test_item("book", "Kept", "2020"),
        ];
        let md = render_markdown_list(&items);
        assert!(md.contains("**Kept**"));
        assert!(!md.contains("file.pdf"));
        assert!(!md.contains("scratch"));
    }

    #[test]
    fn test_et_al_after_three_authors() {
        let mut item = test_item("journalArticle", "Crowded", "2021");
        item.data.creators = vec![
            author("First"),
            author("Second"),
            author("Third"),
            author("Fourth"),
        ];
        let md = render_markdown_list(&[item]);
        assert!(md.contains("First, Second, Third et al."));
        assert!(!md.contains("Fourth"));
    }

    #[test]
    fn test_doi_link() {
        let mut item = test_item("journalArticle", "Linked", "2021");
        item.data.doi = "10.1000/xyz".to_string();
        let md = render_markdown_list(&[item]);
        assert!(md.contains("[DOI](https://doi.org/10.1000/xyz)"));
    }

    #[test]
    fn test_unknown_year_group() {
        let items = vec![test_item("book", "Dateless", "")];
        let md = render_markdown_list(&items);
        assert!(md.contains("## Unknown"));
    }

    #[test]
    fn test_header() {
        let md = render_markdown_list(&[]);
        assert!(md.starts_with("# Zotero Library Export\n"));
        assert!(md.contains("Generated: "));
    }
}
