//! Item-to-BibTeX conversion.

use crate::models::{Creator, ItemData, ItemRecord};

/// Map a Zotero item type to its BibTeX entry type.
fn bibtex_type(item_type: &str) -> &'static str {
    match item_type {
        "journalArticle" => "article",
        "conferencePaper" => "inproceedings",
        "book" => "book",
        "bookSection" => "incollection",
        "thesis" => "phdthesis",
        "report" => "techreport",
        "webpage" => "misc",
        _ => "misc",
    }
}

/// Citation key: lowercased first-creator surname, the date's first four
/// characters (or `nodate`), and the first word of the title (or `notitle`),
/// with everything non-alphanumeric stripped.
fn citation_key(data: &ItemData) -> String {
    let first_author = data
        .creators
        .first()
        .map(|c| {
            let surname = c.display_surname();
            if surname.is_empty() {
                "unknown"
            } else {
                surname
            }
        })
        .unwrap_or("");

    let year = bibtex_year(data);

    let title_word = data
        .title
        .split_whitespace()
        .next()
        .unwrap_or("notitle");

    format!("{}{}{}", first_author.to_lowercase(), year, title_word.to_lowercase())
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// The key/field year is the raw date prefix; only an absent date falls back
/// to `nodate`. (The organizer's digit-checked "Unknown" rule does not apply
/// here.)
fn bibtex_year(data: &ItemData) -> String {
    if data.date.is_empty() {
        "nodate".to_string()
    } else {
        data.date.chars().take(4).collect()
    }
}

fn format_author(creator: &Creator) -> String {
    if !creator.last_name.is_empty() {
        format!("{}, {}", creator.last_name, creator.first_name)
    } else {
        creator.name.clone()
    }
}

/// Convert one item to a BibTeX entry. Returns `None` for entries that would
/// carry no fields beyond the key.
pub fn item_to_bibtex(data: &ItemData) -> Option<String> {
    let bib_type = bibtex_type(&data.item_type);
    let cite_key = citation_key(data);
    let year = bibtex_year(data);

    let mut fields = Vec::new();

    let authors = data
        .creators
        .iter()
        .filter(|c| c.creator_type == "author")
        .map(format_author)
        .collect::<Vec<_>>()
        .join(" and ");
    if !authors.is_empty() {
        fields.push(format!("  author = {{{}}}", authors));
    }

    if !data.title.is_empty() {
        fields.push(format!("  title = {{{}}}", data.title));
    }

    if year != "nodate" {
        fields.push(format!("  year = {{{}}}", year));
    }

    // Venue field depends on the entry type
    if data.item_type == "journalArticle" && !data.publication_title.is_empty() {
        fields.push(format!("  journal = {{{}}}", data.publication_title));
    } else if data.item_type == "conferencePaper" && !data.conference_name.is_empty() {
        fields.push(format!("  booktitle = {{{}}}", data.conference_name));
    }

    if !data.doi.is_empty() {
        fields.push(format!("  doi = {{{}}}", data.doi));
    }
    if !data.url.is_empty() {
        fields.push(format!("  url = {{{}}}", data.url));
    }
    if !data.volume.is_empty() {
        fields.push(format!("  volume = {{{}}}", data.volume));
    }
    if !data.issue.is_empty() {
        fields.push(format!("  number = {{{}}}", data.issue));
    }
    if !data.pages.is_empty() {
        fields.push(format!("  pages = {{{}}}", data.pages));
    }

    if fields.is_empty() {
        return None;
    }

    Some(format!(
        "@{}{{{},\n{}\n}}",
        bib_type,
        cite_key,
        fields.join(",\n")
    ))
}

/// All entries for the item set, attachments and notes excluded.
pub fn bibtex_entries(items: &[ItemRecord]) -> Vec<String> {
    super::bibliographic(items)
        .filter_map(|item| item_to_bibtex(&item.data))
        .collect()
}

/// Render the full item set as BibTeX, entries separated by blank lines.
pub fn render_bibtex(items: &[ItemRecord]) -> String {
    bibtex_entries(items).join("\n\n")
}
