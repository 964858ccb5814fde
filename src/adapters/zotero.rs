//! Zotero Web API client
//!
//! Thin pass-through over the read/write operations this tool needs.
//! See: https://www.zotero.org/support/dev/web_api/v3/start

use crate::config::ZoteroConfig;
use crate::error::{Error, Result};
use crate::models::{CollectionRecord, ItemRecord};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const API_BASE: &str = "https://api.zotero.org";

/// Default timeout for Zotero API requests
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response body of a Zotero write request (e.g. `POST /collections`).
#[derive(Debug, Deserialize)]
pub struct WriteResponse {
    #[serde(default)]
    pub successful: HashMap<String, CollectionRecord>,
    #[serde(default)]
    pub failed: HashMap<String, serde_json::Value>,
}

impl WriteResponse {
    /// Key of the first created object, if any succeeded.
    pub fn first_created_key(&self) -> Option<&str> {
        self.successful.values().next().map(|c| c.key.as_str())
    }
}

/// Client for one Zotero library (user or group).
pub struct ZoteroClient {
    client: Client,
    api_key: String,
    prefix: String,
}

impl ZoteroClient {
    /// Create a new client for the library described by `config`.
    ///
    /// Fails immediately when credentials are absent.
    pub fn new(config: &ZoteroConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingCredentials("ZOTERO_API_KEY"));
        }
        if config.library_id.is_empty() {
            return Err(Error::MissingCredentials("ZOTERO_LIBRARY_ID"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        info!("Zotero client initialized for {}", config.library_prefix());

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            prefix: config.library_prefix(),
        })
    }

    /// Create a client with an existing reqwest client.
    pub fn with_client(client: Client, config: &ZoteroConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            prefix: config.library_prefix(),
        }
    }

    fn library_url(&self, path: &str) -> String {
        format!("{}/{}/{}", API_BASE, self.prefix, path)
    }

    fn headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Zotero-API-Key", &self.api_key)
            .header("Zotero-API-Version", "3")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);
        let resp = self.headers(self.client.get(url)).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json::<T>().await?)
    }

    /// Test the API connection by fetching info about the current key.
    pub async fn test_connection(&self) -> bool {
        let url = format!("{}/keys/current", API_BASE);
        match self.get_json::<serde_json::Value>(&url).await {
            Ok(_) => {
                info!("Zotero connection successful");
                true
            }
            Err(e) => {
                error!("Zotero connection failed: {}", e);
                false
            }
        }
    }

    /// All collections (folders) in the library.
    pub async fn collections(&self) -> Result<Vec<CollectionRecord>> {
        self.get_json(&self.library_url("collections")).await
    }

    /// A specific collection by key.
    pub async fn collection(&self, collection_key: &str) -> Result<CollectionRecord> {
        self.get_json(&self.library_url(&format!("collections/{}", collection_key)))
            .await
    }

    /// Items in a collection, up to `limit`.
    pub async fn collection_items(
        &self,
        collection_key: &str,
        limit: u32,
    ) -> Result<Vec<ItemRecord>> {
        let path = format!("collections/{}/items?limit={}", collection_key, limit);
        self.get_json(&self.library_url(&path)).await
    }

    /// All items in the library, up to `limit`.
    pub async fn items(&self, limit: u32) -> Result<Vec<ItemRecord>> {
        self.get_json(&self.library_url(&format!("items?limit={}", limit)))
            .await
    }

    /// Top-level items (no parent item), up to `limit`.
    pub async fn top_items(&self, limit: u32) -> Result<Vec<ItemRecord>> {
        self.get_json(&self.library_url(&format!("items/top?limit={}", limit)))
            .await
    }

    /// A specific item by key.
    pub async fn item(&self, item_key: &str) -> Result<ItemRecord> {
        self.get_json(&self.library_url(&format!("items/{}", item_key)))
            .await
    }

    /// Search items by query string, up to `limit`.
    pub async fn search_items(&self, query: &str, limit: u32) -> Result<Vec<ItemRecord>> {
        let path = format!("items?q={}&limit={}", urlencoding::encode(query), limit);
        self.get_json(&self.library_url(&path)).await
    }

    /// Find a collection by name, case-insensitively. Fetches the full
    /// collection list; the first match wins.
    pub async fn find_collection_by_name(&self, name: &str) -> Result<Option<CollectionRecord>> {
        let needle = name.to_lowercase();
        let collections = self.collections().await?;
        Ok(collections
            .into_iter()
            .find(|c| c.data.name.to_lowercase() == needle))
    }

    /// Create a collection, optionally under a parent.
    pub async fn create_collection(
        &self,
        name: &str,
        parent_key: Option<&str>,
    ) -> Result<WriteResponse> {
        let mut payload = serde_json::json!({ "name": name });
        if let Some(parent) = parent_key {
            payload["parentCollection"] = serde_json::Value::String(parent.to_string());
        }

        let url = self.library_url("collections");
        debug!("POST {} ({})", url, name);
        let resp = self
            .headers(self.client.post(&url))
            .json(&serde_json::json!([payload]))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let outcome: WriteResponse = resp.json().await?;
        if !outcome.failed.is_empty() {
            warn!("create_collection '{}' partially failed: {:?}", name, outcome.failed);
        }
        Ok(outcome)
    }

    /// Rename a collection.
    pub async fn update_collection(&self, collection_key: &str, name: &str) -> Result<()> {
        let current = self.collection(collection_key).await?;
        let url = self.library_url(&format!("collections/{}", collection_key));
        debug!("PATCH {} (name={})", url, name);
        let resp = self
            .headers(self.client.patch(&url))
            .header("If-Unmodified-Since-Version", current.version)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;

        self.check_write(resp).await
    }

    /// Delete a collection.
    pub async fn delete_collection(&self, collection_key: &str) -> Result<()> {
        let current = self.collection(collection_key).await?;
        let url = self.library_url(&format!("collections/{}", collection_key));
        debug!("DELETE {}", url);
        let resp = self
            .headers(self.client.delete(&url))
            .header("If-Unmodified-Since-Version", current.version)
            .send()
            .await?;

        self.check_write(resp).await
    }

    /// Add an item to a collection. No-op when already a member.
    pub async fn add_item_to_collection(
        &self,
        item_key: &str,
        collection_key: &str,
    ) -> Result<()> {
        let item = self.item(item_key).await?;
        let mut collections = item.data.collections.clone();
        if collections.iter().any(|k| k == collection_key) {
            return Ok(());
        }
        collections.push(collection_key.to_string());
        self.write_item_collections(item_key, item.version, &collections)
            .await
    }

    /// Remove an item from a collection. No-op when not a member.
    pub async fn remove_item_from_collection(
        &self,
        item_key: &str,
        collection_key: &str,
    ) -> Result<()> {
        let item = self.item(item_key).await?;
        let mut collections = item.data.collections.clone();
        let before = collections.len();
        collections.retain(|k| k != collection_key);
        if collections.len() == before {
            return Ok(());
        }
        self.write_item_collections(item_key, item.version, &collections)
            .await
    }

    /// PATCH just the membership list, guarded by the item version. A full PUT
    /// would drop fields this model does not carry.
    async fn write_item_collections(
        &self,
        item_key: &str,
        version: u64,
        collections: &[String],
    ) -> Result<()> {
        let url = self.library_url(&format!("items/{}", item_key));
        debug!("PATCH {} (collections)", url);
        let resp = self
            .headers(self.client.patch(&url))
            .header("If-Unmodified-Since-Version", version)
            .json(&serde_json::json!({ "collections": collections }))
            .send()
            .await?;

        self.check_write(resp).await
    }

    async fn check_write(&self, resp: reqwest::Response) -> Result<()> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let message = resp.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibraryType;

    fn test_config() -> ZoteroConfig {
        ZoteroConfig {
            api_key: "test-key".to_string(),
            library_id: "12345".to_string(),
            library_type: LibraryType::User,
        }
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = ZoteroClient::new(&test_config());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_client_requires_api_key() {
        let mut config = test_config();
        config.api_key = String::new();
        match ZoteroClient::new(&config) {
            Err(Error::MissingCredentials(var)) => assert_eq!(var, "ZOTERO_API_KEY"),
            other => panic!("expected MissingCredentials, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_client_requires_library_id() {
        let mut config = test_config();
        config.library_id = String::new();
        assert!(matches!(
            ZoteroClient::new(&config),
            Err(Error::MissingCredentials("ZOTERO_LIBRARY_ID"))
        ));
    }

    #[test]
    fn test_library_url() {
        let client = ZoteroClient::with_client(Client::new(), &test_config());
        assert_eq!(
            client.library_url("collections"),
            "https://api.zotero.org/users/12345/collections"
        );
    }

    #[test]
    fn test_write_response_first_created_key() {
        let json = r#"{
            "successful": {
                "0": {"key": "NEWCOLL1", "version": 1, "data": {"name": "2021"}}
            },
            "failed": {}
        }"#;
        let resp: WriteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_created_key(), Some("NEWCOLL1"));
    }
}
