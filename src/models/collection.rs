use serde::{Deserialize, Deserializer, Serialize};

/// A collection record as returned by the Zotero API.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionRecord {
    pub key: String,
    #[serde(default)]
    pub version: u64,
    pub data: CollectionData,
    #[serde(default)]
    pub meta: CollectionMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionData {
    pub name: String,
    /// Zotero encodes "no parent" as the JSON literal `false`.
    #[serde(
        rename = "parentCollection",
        default,
        deserialize_with = "parent_collection"
    )]
    pub parent_collection: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionMeta {
    #[serde(rename = "numItems", default)]
    pub num_items: u64,
}

/// `parentCollection` is either a collection key or `false`.
fn parent_collection<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Parent {
        Key(String),
        None(bool),
    }

    Ok(match Option::<Parent>::deserialize(deserializer)? {
        Some(Parent::Key(key)) => Some(key),
        _ => None,
    })
}

/// One node of the derived collection tree. Rebuilt on every query; nothing
/// here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionNode {
    pub key: String,
    pub name: String,
    pub parent: Option<String>,
    pub item_count: u64,
    pub children: Vec<CollectionNode>,
}

impl CollectionNode {
    pub fn from_record(record: &CollectionRecord) -> Self {
        Self {
            key: record.key.clone(),
            name: record.data.name.clone(),
            parent: record.data.parent_collection.clone(),
            item_count: record.meta.num_items,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_collection_false() {
        let json = r#"{
            "key": "ABCD1234",
            "version": 3,
            "data": {"name": "Papers", "parentCollection": false},
            "meta": {"numItems": 7}
        }"#;
        let record: CollectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.data.parent_collection, None);
        assert_eq!(record.meta.num_items, 7);
    }

    #[test]
    fn test_parent_collection_key() {
        let json = r#"{
            "key": "ABCD1234",
            "data": {"name": "2023", "parentCollection": "WXYZ9876"}
        }"#;
        let record: CollectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.data.parent_collection,
            Some("WXYZ9876".to_string())
        );
        assert_eq!(record.meta.num_items, 0);
    }

    #[test]
    fn test_parent_collection_missing() {
        let json = r#"{"key": "ABCD1234", "data": {"name": "Loose"}}"#;
        let record: CollectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.data.parent_collection, None);
    }
}
