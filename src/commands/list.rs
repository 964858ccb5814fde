//! `list` command: print the items of one collection.

use crate::adapters::ZoteroClient;
use crate::error::Result;
use crate::models::{ItemData, ATTACHMENT};

pub async fn run(client: &ZoteroClient, collection: &str) -> Result<()> {
    let coll = match client.find_collection_by_name(collection).await? {
        Some(coll) => coll,
        None => {
            println!("Collection '{}' not found", collection);
            return Ok(());
        }
    };

    let items = client.collection_items(&coll.key, 100).await?;
    for item in items.iter().filter(|i| i.data.item_type != ATTACHMENT) {
        println!("{}", format_line(&item.data));
    }

    Ok(())
}

fn format_line(data: &ItemData) -> String {
    let year: String = data.date.chars().take(4).collect();

    let mut authors = data
        .creators
        .iter()
        .take(2)
        .map(|c| c.display_surname().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if data.creators.len() > 2 {
        authors.push_str(" et al.");
    }

    let title: String = data.title.chars().take(60).collect();
    format!("[{}] {}... - {}", year, title, authors)
}
