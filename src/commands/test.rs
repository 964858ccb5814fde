//! `test` command: check the API connection.

use crate::adapters::ZoteroClient;
use crate::error::Result;

pub async fn run(client: &ZoteroClient) -> Result<()> {
    if client.test_connection().await {
        println!("Connection successful!");
    } else {
        println!("Connection failed!");
    }
    Ok(())
}
