//! Year-based collection organizer.
//!
//! Partitions the items of a source collection into `{source}-{year}`
//! sub-collections. Remote state is mutated as it goes; a single item's
//! failure is logged and skipped, and the batch continues.

use crate::adapters::ZoteroClient;
use crate::error::Result;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// Organize the named collection's items by publication year.
///
/// Returns `year -> count` of items successfully filed. A name-lookup miss
/// prints a message and returns an empty map. Sub-collections created for a
/// year stay in place even when every add for that year later fails.
pub async fn organize_by_year(
    client: &ZoteroClient,
    source_name: &str,
) -> Result<BTreeMap<String, usize>> {
    let source = match client.find_collection_by_name(source_name).await? {
        Some(coll) => coll,
        None => {
            println!("Collection '{}' not found", source_name);
            return Ok(BTreeMap::new());
        }
    };

    let items = client.collection_items(&source.key, 100).await?;
    let mut year_counts: BTreeMap<String, usize> = BTreeMap::new();
    // year collection name -> key, so each year is resolved at most once
    let mut year_keys: HashMap<String, String> = HashMap::new();

    for item in &items {
        if item.data.item_type == crate::models::ATTACHMENT {
            continue;
        }

        let year = item.data.year();
        let year_coll_name = format!("{}-{}", source_name, year);

        let year_key = match year_keys.get(&year_coll_name) {
            Some(key) => key.clone(),
            None => match find_or_create(client, &year_coll_name, &source.key).await {
                Ok(key) => {
                    year_keys.insert(year_coll_name.clone(), key.clone());
                    key
                }
                Err(e) => {
                    warn!("Could not resolve year collection '{}': {}", year_coll_name, e);
                    continue;
                }
            },
        };

        if let Err(e) = client.add_item_to_collection(&item.key, &year_key).await {
            warn!("Failed to add item {} to '{}': {}", item.key, year_coll_name, e);
            continue;
        }

        *year_counts.entry(year).or_insert(0) += 1;
    }

    info!(
        "Organized {} items from '{}' by year",
        year_counts.values().sum::<usize>(),
        source_name
    );

    Ok(year_counts)
}

/// Resolve a year sub-collection by name, creating it under the source when
/// it does not exist yet.
async fn find_or_create(
    client: &ZoteroClient,
    name: &str,
    parent_key: &str,
) -> Result<String> {
    if let Some(existing) = client.find_collection_by_name(name).await? {
        return Ok(existing.key);
    }

    let outcome = client.create_collection(name, Some(parent_key)).await?;
    if let Some(key) = outcome.first_created_key() {
        return Ok(key.to_string());
    }

    // The create call succeeded at the HTTP level but produced nothing;
    // fall back to a lookup in case of a concurrent writer.
    match client.find_collection_by_name(name).await? {
        Some(coll) => Ok(coll.key),
        None => Err(crate::error::Error::NotFound(name.to_string())),
    }
}
