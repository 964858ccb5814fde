use serde::{Deserialize, Serialize};

/// Item types that are attachments of a real record rather than records
/// themselves; exports and the organizer skip these.
pub const ATTACHMENT: &str = "attachment";
pub const NOTE: &str = "note";

/// Year marker for items without a usable date.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// An item record as returned by the Zotero API.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub key: String,
    #[serde(default)]
    pub version: u64,
    pub data: ItemData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemData {
    #[serde(rename = "itemType", default)]
    pub item_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "DOI", default)]
    pub doi: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "abstractNote", default)]
    pub abstract_note: String,
    #[serde(rename = "publicationTitle", default)]
    pub publication_title: String,
    #[serde(rename = "conferenceName", default)]
    pub conference_name: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub pages: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub collections: Vec<String>,
}

/// One creator, in item order. Personal names carry first/last parts;
/// institutional names use the bare `name` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Creator {
    #[serde(rename = "creatorType", default)]
    pub creator_type: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(rename = "lastName", default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl Creator {
    /// Surname when present, else the institutional display name.
    pub fn display_surname(&self) -> &str {
        if !self.last_name.is_empty() {
            &self.last_name
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub tag: String,
}

impl ItemData {
    /// Whether the item is an attachment or note rather than a bibliographic
    /// record.
    pub fn is_auxiliary(&self) -> bool {
        self.item_type == ATTACHMENT || self.item_type == NOTE
    }

    /// Publication year: the first four characters of the date when they are
    /// all ASCII digits, else `"Unknown"`.
    pub fn year(&self) -> String {
        let prefix: String = self.date.chars().take(4).collect();
        if prefix.len() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
            prefix
        } else {
            UNKNOWN_YEAR.to_string()
        }
    }
}
