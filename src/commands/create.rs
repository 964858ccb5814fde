//! `create` command: create a collection, optionally under a parent.

use crate::adapters::ZoteroClient;
use crate::error::Result;

pub async fn run(client: &ZoteroClient, name: &str, parent: Option<&str>) -> Result<()> {
    let parent_key = match parent {
        Some(parent_name) => match client.find_collection_by_name(parent_name).await? {
            Some(coll) => Some(coll.key),
            None => {
                println!("Parent collection '{}' not found", parent_name);
                return Ok(());
            }
        },
        None => None,
    };

    let outcome = client.create_collection(name, parent_key.as_deref()).await?;
    if outcome.first_created_key().is_some() {
        println!("Created collection: {}", name);
    } else {
        println!("Failed to create collection: {}", name);
    }

    Ok(())
}
