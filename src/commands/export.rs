//! Export handler shared by the `zotman-export` binary.

use crate::adapters::ZoteroClient;
use crate::error::Result;
use crate::export::{bibtex, fetch_items, json, markdown};
use chrono::Local;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lowercase")]
pub enum ExportFormat {
    Bibtex,
    Json,
    Markdown,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Bibtex => "bib",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

pub async fn run(
    client: &ZoteroClient,
    format: ExportFormat,
    collection: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    // Resolve the collection name to a key up front; exporting the whole
    // library when the name does not exist would be surprising.
    let collection_key = match collection {
        Some(name) => match client.find_collection_by_name(name).await? {
            Some(coll) => Some(coll.key),
            None => {
                println!("Collection '{}' not found", name);
                return Ok(());
            }
        },
        None => None,
    };

    let items = fetch_items(client, collection_key.as_deref()).await?;

    let (content, count) = match format {
        ExportFormat::Bibtex => {
            let entries = bibtex::bibtex_entries(&items);
            let count = entries.len();
            (entries.join("\n\n"), count)
        }
        ExportFormat::Json => {
            let count = crate::export::bibliographic(&items).count();
            (json::render_json(&items)?, count)
        }
        ExportFormat::Markdown => {
            let count = crate::export::bibliographic(&items).count();
            (markdown::render_markdown_list(&items), count)
        }
    };

    let path = output.unwrap_or_else(|| default_output_path(format, collection));
    super::tree::write_export(&path, &content)?;
    println!("Exported {} items", count);

    Ok(())
}

/// `exports/library[-{collection}]-{YYYYMMDD}.{ext}`
fn default_output_path(format: ExportFormat, collection: Option<&str>) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d");
    let suffix = collection.map(|c| format!("-{}", c)).unwrap_or_default();
    Path::new("exports").join(format!(
        "library{}-{}.{}",
        suffix,
        timestamp,
        format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(ExportFormat::Bibtex, Some("ml"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("library-ml-"));
        assert!(name.ends_with(".bib"));

        let path = default_output_path(ExportFormat::Json, None);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("library-"));
        assert!(name.ends_with(".json"));
    }
}
