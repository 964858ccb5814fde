//! `tree` command: show or export the collection hierarchy.

use crate::adapters::ZoteroClient;
use crate::error::Result;
use crate::tree::{build_tree, render_json, render_markdown, render_text};
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn run(
    client: &ZoteroClient,
    json: bool,
    markdown: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let collections = client.collections().await?;
    let roots = build_tree(&collections);

    if json {
        let path = output.unwrap_or_else(|| Path::new("exports").join("collections.json"));
        write_export(&path, &render_json(&roots)?)?;
    } else if markdown {
        let path = output.unwrap_or_else(|| Path::new("exports").join("collections.md"));
        write_export(&path, &render_markdown(&roots))?;
    } else {
        print!("{}", render_text(&roots));
    }

    Ok(())
}

/// Write an export file, creating the parent directory when needed.
pub(crate) fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    info!("Wrote {}", path.display());
    println!("Exported to: {}", path.display());
    Ok(())
}
