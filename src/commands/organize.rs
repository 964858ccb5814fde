//! `organize` command: partition a collection's items by year.

use crate::adapters::ZoteroClient;
use crate::error::Result;
use crate::organize::organize_by_year;

pub async fn run(client: &ZoteroClient, collection: &str) -> Result<()> {
    let year_counts = organize_by_year(client, collection).await?;
    if year_counts.is_empty() {
        return Ok(());
    }

    let total: usize = year_counts.values().sum();
    println!("Organized {} items by year:", total);
    for (year, count) in &year_counts {
        println!("  {}: {} items", year, count);
    }

    Ok(())
}
